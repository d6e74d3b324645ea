//! # no-supports
//!
//! Procedural generation of self-supporting 2D infill lattices for 3D
//! printing: ascending chevron grids with connector struts, and staggered
//! hexagonal meshes, framed by an outer/inner working rectangle.
//!
//! The engine is a pure function from numeric parameters to polyline
//! geometry. Serialization is pluggable through the [`sink::LayoutSink`]
//! seam; SVG and DXF sinks ship in this crate, and a CAD host adapter can
//! implement the same trait against its own sketch API.

pub mod dxf_output;
pub mod geometry;
pub mod layout;
pub mod patterns;
pub mod sink;
pub mod svg;

// Re-export common types at crate root for convenience.
pub use dxf_output::{ExportError, layout_to_drawing, write_dxf};
pub use geometry::{Line, Point, Polyline};
pub use layout::{Frame, Layout, LayoutError, Strut, compute_frame};
pub use patterns::{
    ChevronParams, HexParams, Pattern, compute_chevron, compute_hexagon, compute_strut,
    generate_chevron_lattice, generate_hex_mesh,
};
pub use sink::{LayoutSink, Orientation};
pub use svg::{SvgError, SvgOptions, read_polylines_from_svg, write_svg};
