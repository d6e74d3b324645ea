//! Frame computation and the layout result type.
//!
//! A layout is the complete output of one generation call: the outer/inner
//! frame rectangles plus the pattern cells and struts placed inside them.
//! Everything is plain geometry; drawing and persistence belong to sinks.
//!
//! ## Rust Lesson #2: Result & Error Enums
//!
//! Rust uses `Result<T, E>` instead of exceptions:
//! - `Ok(value)` = success
//! - `Err(error)` = failure
//!
//! Validation errors here are a plain enum. The compiler forces every caller
//! to decide what to do with them - no forgotten try/catch.

use crate::geometry::{Line, Point, Polyline};

/// A parameter validation failure.
///
/// Generation rejects bad parameters before computing any geometry; nothing
/// is clamped or silently divided through.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// A length that must be strictly positive was zero or negative.
    NonPositive { name: &'static str, value: f64 },
    /// A length that must be zero or greater was negative.
    Negative { name: &'static str, value: f64 },
    /// The margin leaves no interior once inset from both sides.
    MarginTooLarge { margin: f64, width: f64, height: f64 },
    /// The row pitch divides by `rows - 1`, so a single row is undefined.
    TooFewRows { rows: usize },
    /// At least one column is required.
    TooFewColumns { columns: usize },
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::NonPositive { name, value } => {
                write!(f, "{} must be positive (got {})", name, value)
            }
            LayoutError::Negative { name, value } => {
                write!(f, "{} must not be negative (got {})", name, value)
            }
            LayoutError::MarginTooLarge { margin, width, height } => {
                write!(
                    f,
                    "margin {} leaves no interior in a {} x {} frame (need width > 2*margin and height > 2*margin)",
                    margin, width, height
                )
            }
            LayoutError::TooFewRows { rows } => {
                write!(f, "row count must be at least 2 (got {}): the row pitch is undefined for a single row", rows)
            }
            LayoutError::TooFewColumns { columns } => {
                write!(f, "column count must be at least 1 (got {})", columns)
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// The outer bounding rectangle and the inset inner working frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub outer: Polyline,
    pub inner: Polyline,
}

/// A pair of parallel vertical segments connecting adjacent pattern columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strut {
    pub left: Line,
    pub right: Line,
}

impl Strut {
    /// Flip both segments vertically (`y -> height - y`).
    #[inline]
    pub fn flipped_y(&self, height: f64) -> Strut {
        Strut {
            left: self.left.flipped_y(height),
            right: self.right.flipped_y(height),
        }
    }
}

/// The complete result of one generation call.
///
/// Cells are closed outlines in the order the generator placed them
/// (row-major for the chevron lattice); struts run left to right. The order
/// is part of the contract - sinks emit it verbatim, so output is
/// reproducible run to run.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Overall bounding width the layout was generated for.
    pub width: f64,
    /// Overall bounding height the layout was generated for.
    pub height: f64,
    pub frame: Frame,
    pub cells: Vec<Polyline>,
    pub struts: Vec<Strut>,
}

/// Compute the outer bounding rectangle and the inset inner working frame.
///
/// The outer rectangle spans (0,0)-(width,height). The inner rectangle rises
/// `margin` from the bottom-left, but its top-right corner lands at
/// `(width - 2*margin, height - 2*margin)`: the top and right margins are
/// twice the bottom and left ones. Re-imported sketches and downstream
/// fixtures depend on this exact inset, so it must not be symmetrized.
// TODO: confirm with the product owner whether the doubled top/right margin
// is intentional before changing this.
pub fn compute_frame(width: f64, height: f64, margin: f64) -> Frame {
    let outer = Polyline::closed(vec![
        Point::new(0.0, 0.0),
        Point::new(width, 0.0),
        Point::new(width, height),
        Point::new(0.0, height),
    ]);

    let inner_right = width - margin * 2.0;
    let inner_top = height - margin * 2.0;
    let inner = Polyline::closed(vec![
        Point::new(margin, margin),
        Point::new(inner_right, margin),
        Point::new(inner_right, inner_top),
        Point::new(margin, inner_top),
    ]);

    Frame { outer, inner }
}

/// Check the shared bounding-box parameters used by every pattern.
pub(crate) fn validate_bounds(width: f64, height: f64, margin: f64) -> Result<(), LayoutError> {
    if width <= 0.0 {
        return Err(LayoutError::NonPositive { name: "width", value: width });
    }
    if height <= 0.0 {
        return Err(LayoutError::NonPositive { name: "height", value: height });
    }
    if margin < 0.0 {
        return Err(LayoutError::Negative { name: "margin", value: margin });
    }
    if width <= margin * 2.0 || height <= margin * 2.0 {
        return Err(LayoutError::MarginTooLarge { margin, width, height });
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_outer_corners() {
        let frame = compute_frame(200.0, 100.0, 10.0);
        assert_eq!(
            frame.outer.points,
            vec![
                Point::new(0.0, 0.0),
                Point::new(200.0, 0.0),
                Point::new(200.0, 100.0),
                Point::new(0.0, 100.0),
            ]
        );
        assert!(frame.outer.closed);
    }

    #[test]
    fn frame_inner_inset_is_asymmetric() {
        // Bottom/left margin 10, top/right margin 20. The inset is NOT
        // symmetric and must stay that way.
        let frame = compute_frame(200.0, 100.0, 10.0);
        assert_eq!(
            frame.inner.points,
            vec![
                Point::new(10.0, 10.0),
                Point::new(180.0, 10.0),
                Point::new(180.0, 80.0),
                Point::new(10.0, 80.0),
            ]
        );
        assert!(frame.inner.closed);
    }

    #[test]
    fn frame_winding_is_consistent() {
        let frame = compute_frame(200.0, 100.0, 10.0);
        assert!(frame.outer.signed_area() > 0.0, "outer should wind counter-clockwise");
        assert!(frame.inner.signed_area() > 0.0, "inner should wind counter-clockwise");
    }

    #[test]
    fn bounds_validation() {
        assert!(validate_bounds(100.0, 50.0, 5.0).is_ok());
        assert!(matches!(
            validate_bounds(0.0, 50.0, 5.0),
            Err(LayoutError::NonPositive { name: "width", .. })
        ));
        assert!(matches!(
            validate_bounds(100.0, -1.0, 5.0),
            Err(LayoutError::NonPositive { name: "height", .. })
        ));
        assert!(matches!(
            validate_bounds(100.0, 50.0, -0.5),
            Err(LayoutError::Negative { name: "margin", .. })
        ));
        assert!(matches!(
            validate_bounds(100.0, 50.0, 25.0),
            Err(LayoutError::MarginTooLarge { .. })
        ));
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = LayoutError::TooFewRows { rows: 1 };
        let msg = err.to_string();
        assert!(msg.contains("at least 2"), "got: {}", msg);
        assert!(msg.contains("1"), "got: {}", msg);
    }
}
