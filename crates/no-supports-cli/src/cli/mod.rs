//! CLI command implementations.
//!
//! - `generate` - Generate a lattice layout and serialize it (SVG/DXF/JSON)
//! - `render` - Rasterize a generated SVG to PNG for quick previews

pub mod common;
pub mod generate;
pub mod render;

pub use generate::cmd_generate;
pub use render::cmd_render;
