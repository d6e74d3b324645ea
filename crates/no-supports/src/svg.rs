//! SVG export and read-back.
//!
//! The writer serializes a layout into a plain vector document - rects for
//! the frame, polylines for the cells, lines for the struts - with stroke
//! attributes suitable for re-import. The reader parses such a document back
//! into polylines using usvg, which is how exports are verified round-trip.

use crate::geometry::{Line, Point, Polyline};
use crate::layout::Layout;
use crate::sink::{LayoutSink, Orientation};

/// Error type for SVG read-back.
#[derive(Debug)]
pub enum SvgError {
    ParseError(String),
    NoGeometry,
}

impl std::fmt::Display for SvgError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SvgError::ParseError(msg) => write!(f, "SVG parse error: {}", msg),
            SvgError::NoGeometry => write!(f, "No geometry found in SVG"),
        }
    }
}

impl std::error::Error for SvgError {}

/// Stroke styling for the exported document.
#[derive(Debug, Clone)]
pub struct SvgOptions {
    pub stroke: String,
    pub stroke_width: f64,
    /// Optional background fill; `None` leaves the canvas transparent.
    pub background: Option<String>,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            stroke: "black".to_string(),
            stroke_width: 0.5,
            background: None,
        }
    }
}

/// Accumulates layout geometry as SVG body elements.
struct SvgBody {
    body: String,
}

impl SvgBody {
    fn new() -> Self {
        Self { body: String::new() }
    }
}

impl LayoutSink for SvgBody {
    fn rect(&mut self, min: Point, max: Point) {
        self.body.push_str(&format!(
            "  <rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\"/>\n",
            min.x,
            min.y,
            max.x - min.x,
            max.y - min.y
        ));
    }

    fn polyline(&mut self, polyline: &Polyline) {
        if polyline.len() < 2 {
            return;
        }

        // Build points string: "x1,y1 x2,y2 x3,y3 ..."
        let mut points: String = polyline
            .points
            .iter()
            .map(|p| format!("{:.2},{:.2}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");

        // A closed outline repeats its first point so the stroke joins up.
        if polyline.closed {
            let first = polyline.points[0];
            points.push_str(&format!(" {:.2},{:.2}", first.x, first.y));
        }

        self.body.push_str(&format!("  <polyline points=\"{}\"/>\n", points));
    }

    fn segment(&mut self, segment: &Line) {
        self.body.push_str(&format!(
            "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\"/>\n",
            segment.x1, segment.y1, segment.x2, segment.y2
        ));
    }
}

/// Serialize a layout into a complete SVG document.
///
/// Most consumers want `Orientation::YDown` here: SVG's Y axis points down,
/// and the flip keeps the lattice visually upright.
pub fn write_svg(layout: &Layout, orientation: Orientation, options: &SvgOptions) -> String {
    let mut sink = SvgBody::new();
    layout.emit(orientation, &mut sink);

    let mut svg = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg"
     width="{:.2}mm" height="{:.2}mm"
     viewBox="0 0 {:.2} {:.2}">
"#,
        layout.width, layout.height, layout.width, layout.height
    );

    if let Some(background) = &options.background {
        svg.push_str(&format!(
            "  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
            background
        ));
    }

    svg.push_str(&format!(
        "<g stroke=\"{}\" stroke-width=\"{}\" fill=\"none\" stroke-linecap=\"round\">\n",
        options.stroke, options.stroke_width
    ));
    svg.push_str(&sink.body);
    svg.push_str("</g>\n</svg>\n");
    svg
}

/// Extract all polylines from an SVG document.
///
/// Parses with usvg (which resolves shapes like `<rect>` and `<line>` into
/// paths) and walks the tree collecting each subpath as one polyline. There
/// is no curve handling: exported documents contain straight segments only,
/// so curve control points are ignored and only their endpoints are kept.
pub fn read_polylines_from_svg(svg_content: &str) -> Result<Vec<Polyline>, SvgError> {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg_content, &options)
        .map_err(|e| SvgError::ParseError(e.to_string()))?;

    let mut polylines = Vec::new();
    extract_from_group(tree.root(), &mut polylines);

    if polylines.is_empty() {
        Err(SvgError::NoGeometry)
    } else {
        Ok(polylines)
    }
}

/// Recursively extract polylines from a usvg Group.
fn extract_from_group(group: &usvg::Group, polylines: &mut Vec<Polyline>) {
    for child in group.children() {
        match child {
            usvg::Node::Group(group) => extract_from_group(group, polylines),
            usvg::Node::Path(path) => extract_from_path(path, polylines),
            // Ignore text, images, etc.
            _ => {}
        }
    }
}

/// Split a usvg path into its subpaths, one polyline each.
fn extract_from_path(path: &usvg::Path, polylines: &mut Vec<Polyline>) {
    let mut points: Vec<Point> = Vec::new();
    let mut closed = false;

    let mut flush = |points: &mut Vec<Point>, closed: &mut bool| {
        if points.len() >= 2 {
            polylines.push(Polyline {
                points: std::mem::take(points),
                closed: *closed,
            });
        } else {
            points.clear();
        }
        *closed = false;
    };

    for segment in path.data().segments() {
        match segment {
            usvg::tiny_skia_path::PathSegment::MoveTo(p) => {
                flush(&mut points, &mut closed);
                points.push(Point::new(p.x as f64, p.y as f64));
            }
            usvg::tiny_skia_path::PathSegment::LineTo(p) => {
                points.push(Point::new(p.x as f64, p.y as f64));
            }
            usvg::tiny_skia_path::PathSegment::QuadTo(_, p) => {
                points.push(Point::new(p.x as f64, p.y as f64));
            }
            usvg::tiny_skia_path::PathSegment::CubicTo(_, _, p) => {
                points.push(Point::new(p.x as f64, p.y as f64));
            }
            usvg::tiny_skia_path::PathSegment::Close => {
                closed = true;
            }
        }
    }
    flush(&mut points, &mut closed);
}

// ============================================================================
// TESTS
// ============================================================================
