//! Ascending chevron lattice.
//!
//! Rows of zig-zag arrow cells climb the working frame so every printed edge
//! rests on the one below it, with vertical struts tying adjacent columns
//! together. The chevron outline keeps a constant wall thickness (webbing)
//! on its vertical edges, which is what makes the lattice self-supporting.

use crate::geometry::{Line, Point, Polyline};
use crate::layout::{Frame, Layout, LayoutError, Strut, compute_frame, validate_bounds};

/// Parameters for one chevron lattice generation call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChevronParams {
    /// Overall bounding width.
    pub width: f64,
    /// Overall bounding height.
    pub height: f64,
    /// Inset from the bounding rectangle to the working frame.
    pub margin: f64,
    /// Chevrons per row.
    pub columns: usize,
    /// Number of rows. Must be at least 2: the row pitch divides by
    /// `rows - 1`.
    pub rows: usize,
    /// Wall thickness of the chevron and strut outlines.
    pub webbing: f64,
}

impl ChevronParams {
    /// Reject invalid parameters before any geometry is computed.
    pub fn validate(&self) -> Result<(), LayoutError> {
        validate_bounds(self.width, self.height, self.margin)?;
        if self.webbing <= 0.0 {
            return Err(LayoutError::NonPositive { name: "webbing", value: self.webbing });
        }
        if self.columns < 1 {
            return Err(LayoutError::TooFewColumns { columns: self.columns });
        }
        if self.rows < 2 {
            return Err(LayoutError::TooFewRows { rows: self.rows });
        }
        Ok(())
    }
}

/// Derived placement for one chevron cell.
///
/// Transient: rebuilt from [`ChevronParams`] on every generation call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChevronSpec {
    pub origin_x: f64,
    pub origin_y: f64,
    pub chevron_width: f64,
    pub webbing: f64,
}

impl ChevronSpec {
    /// The cell outline this placement describes.
    pub fn polyline(&self) -> Polyline {
        compute_chevron(self.chevron_width, self.webbing, self.origin_x, self.origin_y)
    }
}

/// Derived placement for one strut between adjacent columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrutSpec {
    pub origin_x: f64,
    pub origin_y: f64,
    pub height: f64,
    pub webbing: f64,
}

impl StrutSpec {
    /// The segment pair this placement describes.
    pub fn strut(&self) -> Strut {
        compute_strut(self.height, self.webbing, self.origin_x, self.origin_y)
    }
}

/// Compute one closed 6-vertex chevron outline.
///
/// Clockwise from the bottom-left corner: up the left wall (length exactly
/// `webbing`), out to the top apex, down to the right wall, down to the
/// bottom-right corner, then back through the bottom notch. The bottom apex
/// sits `webbing` below the top apex, so both walls measure `webbing` and
/// the shape is symmetric about its vertical midline.
pub fn compute_chevron(chevron_width: f64, webbing: f64, origin_x: f64, origin_y: f64) -> Polyline {
    let apex_height = chevron_width / 2.0;
    let half_width = chevron_width / 2.0;

    let y0 = origin_y;
    let y1 = y0 + webbing;
    let y2 = y1 + apex_height;
    let y3 = y2 - webbing;

    let x0 = origin_x;
    let x1 = x0 + half_width;
    let x2 = origin_x + chevron_width;

    Polyline::closed(vec![
        Point::new(x0, y0),
        Point::new(x0, y1),
        Point::new(x1, y2),
        Point::new(x2, y1),
        Point::new(x2, y0),
        Point::new(x1, y3),
    ])
}

/// Compute one strut: two parallel vertical segments spanning `height`,
/// centered on `origin_x` with a horizontal gap of exactly `webbing`.
pub fn compute_strut(height: f64, webbing: f64, origin_x: f64, origin_y: f64) -> Strut {
    let y0 = origin_y;
    let y1 = y0 + height;

    let x0 = origin_x - webbing / 2.0;
    let x1 = x0 + webbing;

    Strut {
        left: Line::new(x0, y0, x0, y1),
        right: Line::new(x1, y0, x1, y1),
    }
}

/// Generate the full chevron lattice layout.
///
/// Chevrons are placed row-major (row 0 left to right, then row 1, ...) and
/// struts left to right on the interior column boundaries; one chevron per
/// cell, `columns - 1` struts, none on the outer edges. A single column
/// yields a lattice with no struts, which is valid.
pub fn generate_chevron_lattice(params: &ChevronParams) -> Result<Layout, LayoutError> {
    params.validate()?;

    let frame: Frame = compute_frame(params.width, params.height, params.margin);

    let overall_width = params.width - params.margin * 2.0;
    let overall_height = params.height - params.margin * 2.0;

    let chevron_width = overall_width / params.columns as f64;
    let x_step = chevron_width;
    // The row pitch reserves a half chevron plus one wall at the top so the
    // last row's apex stays inside the working frame.
    let y_step =
        (overall_height - chevron_width / 2.0 - params.webbing) / (params.rows - 1) as f64;

    let mut cells = Vec::with_capacity(params.rows * params.columns);
    for row in 0..params.rows {
        for col in 0..params.columns {
            let spec = ChevronSpec {
                origin_x: params.margin + col as f64 * x_step,
                origin_y: params.margin + row as f64 * y_step,
                chevron_width,
                webbing: params.webbing,
            };
            cells.push(spec.polyline());
        }
    }

    let strut_height = y_step * (params.rows - 1) as f64 + params.webbing / 2.0;

    let mut struts = Vec::with_capacity(params.columns.saturating_sub(1));
    for col in 1..params.columns {
        let spec = StrutSpec {
            origin_x: params.margin + col as f64 * x_step,
            origin_y: params.margin,
            height: strut_height,
            webbing: params.webbing,
        };
        struts.push(spec.strut());
    }

    Ok(Layout {
        width: params.width,
        height: params.height,
        frame,
        cells,
        struts,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn base_params() -> ChevronParams {
        ChevronParams {
            width: 100.0,
            height: 50.0,
            margin: 5.0,
            columns: 4,
            rows: 4,
            webbing: 2.0,
        }
    }

    #[test]
    fn chevron_vertex_order() {
        let pl = compute_chevron(10.0, 2.0, 0.0, 0.0);
        assert!(pl.closed);
        assert_eq!(
            pl.points,
            vec![
                Point::new(0.0, 0.0),
                Point::new(0.0, 2.0),
                Point::new(5.0, 7.0),
                Point::new(10.0, 2.0),
                Point::new(10.0, 0.0),
                Point::new(5.0, 5.0),
            ]
        );
    }

    #[test]
    fn chevron_walls_measure_webbing() {
        let pl = compute_chevron(22.5, 1.75, 3.0, 4.0);
        let left = pl.points[0].distance(pl.points[1]);
        let right = pl.points[3].distance(pl.points[4]);
        assert!((left - 1.75).abs() < TOL, "left wall {}", left);
        assert!((right - 1.75).abs() < TOL, "right wall {}", right);
    }

    #[test]
    fn chevron_is_symmetric_about_midline() {
        let pl = compute_chevron(12.0, 2.0, 10.0, 0.0);
        let mid_x = 10.0 + 6.0;
        assert!((pl.points[2].x - mid_x).abs() < TOL, "top apex on midline");
        assert!((pl.points[5].x - mid_x).abs() < TOL, "bottom apex on midline");
        // left/right corners mirror across the midline
        assert!((mid_x - pl.points[0].x - (pl.points[4].x - mid_x)).abs() < TOL);
    }

    #[test]
    fn strut_geometry() {
        let strut = compute_strut(27.75, 2.0, 27.5, 5.0);
        assert_eq!(strut.left, Line::new(26.5, 5.0, 26.5, 32.75));
        assert_eq!(strut.right, Line::new(28.5, 5.0, 28.5, 32.75));
        // segments are parallel verticals separated by exactly the webbing
        assert!((strut.right.x1 - strut.left.x1 - 2.0).abs() < TOL);
        assert_eq!(strut.left.x2, strut.left.x1);
        assert_eq!(strut.right.x2, strut.right.x1);
    }

    #[test]
    fn grid_counts_and_first_origin() {
        let layout = generate_chevron_lattice(&base_params()).unwrap();

        assert_eq!(layout.cells.len(), 16);
        assert_eq!(layout.struts.len(), 3);

        // chevron_width = (100 - 10) / 4 = 22.5; first chevron sits at the
        // working-frame origin
        assert_eq!(layout.cells[0].points[0], Point::new(5.0, 5.0));
        let width = layout.cells[0].points[4].x - layout.cells[0].points[0].x;
        assert!((width - 22.5).abs() < TOL, "chevron width {}", width);
    }

    #[test]
    fn grid_is_row_major() {
        let layout = generate_chevron_lattice(&base_params()).unwrap();
        let y_step = (40.0 - 22.5 / 2.0 - 2.0) / 3.0;

        // second cell is one column over, same row
        assert_eq!(layout.cells[1].points[0], Point::new(5.0 + 22.5, 5.0));
        // fifth cell starts row 1
        let origin = layout.cells[4].points[0];
        assert!((origin.x - 5.0).abs() < TOL);
        assert!((origin.y - (5.0 + y_step)).abs() < TOL);
    }

    #[test]
    fn struts_sit_on_interior_boundaries() {
        let layout = generate_chevron_lattice(&base_params()).unwrap();
        let y_step = (40.0 - 22.5 / 2.0 - 2.0) / 3.0;
        let strut_height = y_step * 3.0 + 1.0;

        let centers: Vec<f64> = layout
            .struts
            .iter()
            .map(|s| (s.left.x1 + s.right.x1) / 2.0)
            .collect();
        assert_eq!(centers.len(), 3);
        for (i, center) in centers.iter().enumerate() {
            let expected = 5.0 + (i + 1) as f64 * 22.5;
            assert!((center - expected).abs() < TOL, "strut {} at {}", i, center);
        }

        for strut in &layout.struts {
            assert!((strut.left.length() - strut_height).abs() < TOL);
            assert!((strut.right.length() - strut_height).abs() < TOL);
            assert!((strut.left.y1 - 5.0).abs() < TOL, "struts start at the margin");
        }
    }

    #[test]
    fn all_cells_keep_wall_thickness() {
        let layout = generate_chevron_lattice(&base_params()).unwrap();
        for cell in &layout.cells {
            let left = cell.points[0].distance(cell.points[1]);
            let right = cell.points[3].distance(cell.points[4]);
            assert!((left - 2.0).abs() < TOL);
            assert!((right - 2.0).abs() < TOL);
        }
    }

    #[test]
    fn single_row_is_rejected() {
        let mut params = base_params();
        params.rows = 1;
        assert_eq!(
            generate_chevron_lattice(&params),
            Err(LayoutError::TooFewRows { rows: 1 })
        );

        params.rows = 0;
        assert!(matches!(
            generate_chevron_lattice(&params),
            Err(LayoutError::TooFewRows { rows: 0 })
        ));
    }

    #[test]
    fn zero_columns_is_rejected() {
        let mut params = base_params();
        params.columns = 0;
        assert!(matches!(
            generate_chevron_lattice(&params),
            Err(LayoutError::TooFewColumns { columns: 0 })
        ));
    }

    #[test]
    fn single_column_yields_no_struts() {
        let mut params = base_params();
        params.columns = 1;
        let layout = generate_chevron_lattice(&params).unwrap();
        assert_eq!(layout.cells.len(), 4);
        assert!(layout.struts.is_empty());
    }

    #[test]
    fn non_positive_webbing_is_rejected() {
        let mut params = base_params();
        params.webbing = 0.0;
        assert!(matches!(
            generate_chevron_lattice(&params),
            Err(LayoutError::NonPositive { name: "webbing", .. })
        ));
    }
}
