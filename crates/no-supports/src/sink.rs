//! The seam between geometry and serialization.
//!
//! The engine computes plain numbers; anything that persists or renders them
//! (an SVG document, a DXF drawing, a host sketch adapter) implements
//! [`LayoutSink`] and receives the layout through [`Layout::emit`]. The sink
//! never sees generation parameters, and the engine never sees file formats.

use crate::geometry::{Line, Point, Polyline};
use crate::layout::Layout;

/// Vertical orientation requested by a sink.
///
/// `YUp` is the engine's native orientation. `YDown` flips every emitted
/// point (`y -> height - y`) for coordinate systems with an inverted Y axis,
/// such as raster and vector documents. The flip is applied uniformly as a
/// final transform; the underlying geometry is never computed differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    YUp,
    YDown,
}

/// Receives one layout's geometry in deterministic order.
pub trait LayoutSink {
    /// An axis-aligned frame rectangle, given as its min/max corners.
    fn rect(&mut self, min: Point, max: Point);
    /// A pattern cell outline.
    fn polyline(&mut self, polyline: &Polyline);
    /// One strut segment.
    fn segment(&mut self, segment: &Line);
}

impl Layout {
    /// Walk the layout into a sink: outer rect, inner rect, cells in
    /// generation order, then each strut's left and right segments.
    pub fn emit(&self, orientation: Orientation, sink: &mut dyn LayoutSink) {
        self.emit_rect(&self.frame.outer, orientation, sink);
        self.emit_rect(&self.frame.inner, orientation, sink);

        for cell in &self.cells {
            match orientation {
                Orientation::YUp => sink.polyline(cell),
                Orientation::YDown => sink.polyline(&cell.flipped_y(self.height)),
            }
        }

        for strut in &self.struts {
            let strut = match orientation {
                Orientation::YUp => *strut,
                Orientation::YDown => strut.flipped_y(self.height),
            };
            sink.segment(&strut.left);
            sink.segment(&strut.right);
        }
    }

    fn emit_rect(&self, outline: &Polyline, orientation: Orientation, sink: &mut dyn LayoutSink) {
        let Some((min_x, min_y, max_x, max_y)) = outline.bounding_box() else {
            return;
        };
        match orientation {
            Orientation::YUp => {
                sink.rect(Point::new(min_x, min_y), Point::new(max_x, max_y));
            }
            Orientation::YDown => {
                // flipping swaps which corner is lowest; re-normalize
                sink.rect(
                    Point::new(min_x, self.height - max_y),
                    Point::new(max_x, self.height - min_y),
                );
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::{ChevronParams, generate_chevron_lattice};

    #[derive(Default)]
    struct RecordingSink {
        rects: Vec<(Point, Point)>,
        polylines: Vec<Polyline>,
        segments: Vec<Line>,
    }

    impl LayoutSink for RecordingSink {
        fn rect(&mut self, min: Point, max: Point) {
            self.rects.push((min, max));
        }
        fn polyline(&mut self, polyline: &Polyline) {
            self.polylines.push(polyline.clone());
        }
        fn segment(&mut self, segment: &Line) {
            self.segments.push(*segment);
        }
    }

    fn layout() -> Layout {
        generate_chevron_lattice(&ChevronParams {
            width: 100.0,
            height: 50.0,
            margin: 5.0,
            columns: 4,
            rows: 4,
            webbing: 2.0,
        })
        .unwrap()
    }

    #[test]
    fn emits_everything_in_order() {
        let layout = layout();
        let mut sink = RecordingSink::default();
        layout.emit(Orientation::YUp, &mut sink);

        assert_eq!(sink.rects.len(), 2);
        assert_eq!(sink.rects[0], (Point::new(0.0, 0.0), Point::new(100.0, 50.0)));
        assert_eq!(sink.rects[1], (Point::new(5.0, 5.0), Point::new(90.0, 40.0)));
        assert_eq!(sink.polylines.len(), 16);
        assert_eq!(sink.segments.len(), 6); // 3 struts, 2 segments each

        // cells arrive untouched in generation order
        assert_eq!(sink.polylines[0], layout.cells[0]);
    }

    #[test]
    fn y_down_flips_every_point() {
        let layout = layout();

        let mut up = RecordingSink::default();
        layout.emit(Orientation::YUp, &mut up);
        let mut down = RecordingSink::default();
        layout.emit(Orientation::YDown, &mut down);

        for (u, d) in up.polylines.iter().zip(down.polylines.iter()) {
            assert_eq!(&u.flipped_y(50.0), d);
        }
        for (u, d) in up.segments.iter().zip(down.segments.iter()) {
            assert_eq!(u.flipped_y(50.0), *d);
        }
    }

    #[test]
    fn flipped_rects_stay_normalized() {
        let layout = layout();
        let mut down = RecordingSink::default();
        layout.emit(Orientation::YDown, &mut down);

        for (min, max) in &down.rects {
            assert!(min.x <= max.x);
            assert!(min.y <= max.y);
        }
        // inner frame y 5..40 flips to 10..45 on a height-50 canvas
        assert_eq!(down.rects[1], (Point::new(5.0, 10.0), Point::new(90.0, 45.0)));
    }
}
