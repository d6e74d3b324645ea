//! DXF export.
//!
//! Serializes a layout into a lightweight polyline-based DXF drawing for
//! re-import into CAD hosts: frame rectangles and cell outlines become
//! closed LWPOLYLINEs, strut segments become LINE entities, each on its own
//! layer so a host can select them independently.

use dxf::entities::{Entity, EntityType, Line as DxfLine, LwPolyline};
use dxf::{Drawing, LwPolylineVertex};

use crate::geometry::{Line, Point, Polyline};
use crate::layout::Layout;
use crate::sink::{LayoutSink, Orientation};

/// Layer receiving the outer/inner frame rectangles.
pub const FRAME_LAYER: &str = "FRAME";
/// Layer receiving the pattern cell outlines.
pub const CELLS_LAYER: &str = "CELLS";
/// Layer receiving the strut segments.
pub const STRUTS_LAYER: &str = "STRUTS";

/// Error type for DXF export.
#[derive(Debug)]
pub enum ExportError {
    /// The dxf writer failed to produce or save the drawing.
    Save(String),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Save(msg) => write!(f, "DXF export error: {}", msg),
        }
    }
}

impl std::error::Error for ExportError {}

/// Builds up a Drawing as the layout is emitted.
struct DxfSink {
    drawing: Drawing,
}

impl DxfSink {
    fn new() -> Self {
        Self { drawing: Drawing::new() }
    }

    fn add_lwpolyline(&mut self, points: &[Point], closed: bool, layer: &str) {
        let mut vertices = Vec::new();
        for point in points {
            vertices.push(LwPolylineVertex {
                x: point.x,
                y: point.y,
                id: 0,
                starting_width: 0.0,
                ending_width: 0.0,
                bulge: 0.0,
            });
        }

        if vertices.is_empty() {
            return;
        }

        let mut polyline = LwPolyline::default();
        polyline.vertices = vertices;
        if closed {
            polyline.flags = 1; // Closed polyline
        }

        let mut entity = Entity::new(EntityType::LwPolyline(polyline));
        entity.common.layer = layer.to_string();
        self.drawing.add_entity(entity);
    }
}

impl LayoutSink for DxfSink {
    fn rect(&mut self, min: Point, max: Point) {
        let corners = [
            Point::new(min.x, min.y),
            Point::new(max.x, min.y),
            Point::new(max.x, max.y),
            Point::new(min.x, max.y),
        ];
        self.add_lwpolyline(&corners, true, FRAME_LAYER);
    }

    fn polyline(&mut self, polyline: &Polyline) {
        self.add_lwpolyline(&polyline.points, polyline.closed, CELLS_LAYER);
    }

    fn segment(&mut self, segment: &Line) {
        let mut line = DxfLine::default();
        line.p1 = dxf::Point::new(segment.x1, segment.y1, 0.0);
        line.p2 = dxf::Point::new(segment.x2, segment.y2, 0.0);

        let mut entity = Entity::new(EntityType::Line(line));
        entity.common.layer = STRUTS_LAYER.to_string();
        self.drawing.add_entity(entity);
    }
}

/// Build a DXF drawing from a layout.
///
/// DXF shares the engine's Y-up convention, so `Orientation::YUp` is the
/// usual choice here.
pub fn layout_to_drawing(layout: &Layout, orientation: Orientation) -> Drawing {
    let mut sink = DxfSink::new();
    layout.emit(orientation, &mut sink);
    sink.drawing
}

/// Build a DXF drawing from a layout and save it to a file.
pub fn write_dxf(layout: &Layout, orientation: Orientation, path: &str) -> Result<(), ExportError> {
    let drawing = layout_to_drawing(layout, orientation);
    drawing
        .save_file(path)
        .map_err(|e| ExportError::Save(format!("failed to save {}: {:?}", path, e)))?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
