//! Staggered hexagonal mesh.
//!
//! Tiles the working frame with pointy-top hexagons twice as tall as they
//! are wide, offsetting alternate columns by half a row so the cells
//! interlock. Only hexagons that fit entirely inside the inner frame are
//! emitted; partial cells are skipped rather than clipped, since a clipped
//! cell would not print as a closed wall.

use crate::geometry::{Point, Polyline};
use crate::layout::{Layout, LayoutError, compute_frame, validate_bounds};

/// Parameters for one hex mesh generation call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexParams {
    /// Overall bounding width.
    pub width: f64,
    /// Overall bounding height.
    pub height: f64,
    /// Inset from the bounding rectangle to the working frame.
    pub margin: f64,
    /// Width of one hexagon cell; the cell is `2 * hex_width` tall.
    pub hex_width: f64,
    /// Gap left between neighboring cells.
    pub hex_spacing: f64,
}

impl HexParams {
    /// Reject invalid parameters before any geometry is computed.
    pub fn validate(&self) -> Result<(), LayoutError> {
        validate_bounds(self.width, self.height, self.margin)?;
        if self.hex_width <= 0.0 {
            return Err(LayoutError::NonPositive { name: "hex width", value: self.hex_width });
        }
        if self.hex_spacing < 0.0 {
            return Err(LayoutError::Negative { name: "hex spacing", value: self.hex_spacing });
        }
        Ok(())
    }
}

/// Compute one closed 6-vertex hexagon outline.
///
/// From the bottom apex around the perimeter: half-width triangles top and
/// bottom, a full `hex_width` of vertical wall between them, for an overall
/// height of `2 * hex_width`. `origin` is the bottom-left corner of the
/// cell's bounding box.
pub fn compute_hexagon(hex_width: f64, origin_x: f64, origin_y: f64) -> Polyline {
    let half = hex_width / 2.0;

    let y0 = origin_y;
    let y1 = y0 + half;
    let y2 = y1 + hex_width;
    let y3 = y2 + half;

    let x0 = origin_x;
    let x1 = x0 + half;
    let x2 = x1 + half;

    Polyline::closed(vec![
        Point::new(x1, y0),
        Point::new(x0, y1),
        Point::new(x0, y2),
        Point::new(x1, y3),
        Point::new(x2, y2),
        Point::new(x2, y1),
    ])
}

/// Generate the full hex mesh layout.
///
/// Columns run left to right with pitch `hex_width + hex_spacing`; within a
/// column, cells run bottom to top with pitch `2 * hex_width + hex_spacing`.
/// Odd columns are raised by half the row pitch for the honeycomb stagger.
/// A frame too small for any whole cell is valid and yields an empty mesh.
pub fn generate_hex_mesh(params: &HexParams) -> Result<Layout, LayoutError> {
    params.validate()?;

    let frame = compute_frame(params.width, params.height, params.margin);

    // Tile within the inner frame: x margin..width-2*margin,
    // y margin..height-2*margin (the asymmetric inset).
    let min_x = params.margin;
    let min_y = params.margin;
    let max_x = params.width - params.margin * 2.0;
    let max_y = params.height - params.margin * 2.0;

    let cell_width = params.hex_width;
    let cell_height = params.hex_width * 2.0;
    let col_pitch = cell_width + params.hex_spacing;
    let row_pitch = cell_height + params.hex_spacing;

    // Small slack so cells that touch the frame edge exactly still count.
    let eps = 1e-9;

    let mut cells = Vec::new();
    let mut col = 0usize;
    let mut x = min_x;
    while x + cell_width <= max_x + eps {
        let mut y = if col % 2 == 1 { min_y + row_pitch / 2.0 } else { min_y };
        while y + cell_height <= max_y + eps {
            cells.push(compute_hexagon(params.hex_width, x, y));
            y += row_pitch;
        }
        x += col_pitch;
        col += 1;
    }

    Ok(Layout {
        width: params.width,
        height: params.height,
        frame,
        cells,
        struts: Vec::new(),
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn base_params() -> HexParams {
        HexParams {
            width: 200.0,
            height: 100.0,
            margin: 10.0,
            hex_width: 20.0,
            hex_spacing: 2.0,
        }
    }

    #[test]
    fn hexagon_vertex_order() {
        let pl = compute_hexagon(10.0, 0.0, 0.0);
        assert!(pl.closed);
        assert_eq!(
            pl.points,
            vec![
                Point::new(5.0, 0.0),
                Point::new(0.0, 5.0),
                Point::new(0.0, 15.0),
                Point::new(5.0, 20.0),
                Point::new(10.0, 15.0),
                Point::new(10.0, 5.0),
            ]
        );
    }

    #[test]
    fn hexagon_is_twice_as_tall_as_wide() {
        let pl = compute_hexagon(7.0, 3.0, 4.0);
        let (min_x, min_y, max_x, max_y) = pl.bounding_box().unwrap();
        assert_eq!(max_x - min_x, 7.0);
        assert_eq!(max_y - min_y, 14.0);
    }

    #[test]
    fn mesh_tiles_deterministically() {
        let layout = generate_hex_mesh(&base_params()).unwrap();

        // Inner frame spans x 10..180, y 10..80. Seven 20-wide columns fit
        // at pitch 22; each holds exactly one 40-tall cell (even columns at
        // y=10, odd columns raised to y=31).
        assert_eq!(layout.cells.len(), 7);
        assert!(layout.struts.is_empty());

        assert_eq!(layout.cells[0].points[0], Point::new(20.0, 10.0)); // col 0 bottom apex
        assert_eq!(layout.cells[1].points[0], Point::new(42.0, 31.0)); // col 1 raised
    }

    #[test]
    fn spacing_affects_density() {
        let dense = generate_hex_mesh(&base_params()).unwrap();

        let mut sparse_params = base_params();
        sparse_params.hex_spacing = 30.0;
        let sparse = generate_hex_mesh(&sparse_params).unwrap();

        assert!(
            dense.cells.len() > sparse.cells.len(),
            "smaller spacing should fit more cells ({} vs {})",
            dense.cells.len(),
            sparse.cells.len()
        );
    }

    #[test]
    fn cells_stay_inside_inner_frame() {
        let layout = generate_hex_mesh(&base_params()).unwrap();
        let (min_x, min_y, max_x, max_y) = layout.frame.inner.bounding_box().unwrap();
        for cell in &layout.cells {
            let (cmin_x, cmin_y, cmax_x, cmax_y) = cell.bounding_box().unwrap();
            assert!(cmin_x >= min_x - 1e-9 && cmax_x <= max_x + 1e-9);
            assert!(cmin_y >= min_y - 1e-9 && cmax_y <= max_y + 1e-9);
        }
    }

    #[test]
    fn oversized_cell_yields_empty_mesh() {
        let mut params = base_params();
        params.hex_width = 100.0;
        let layout = generate_hex_mesh(&params).unwrap();
        assert!(layout.cells.is_empty());
        // the frame is still produced
        assert_eq!(layout.frame.outer.len(), 4);
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        let mut params = base_params();
        params.hex_width = 0.0;
        assert!(matches!(
            generate_hex_mesh(&params),
            Err(LayoutError::NonPositive { name: "hex width", .. })
        ));

        let mut params = base_params();
        params.hex_spacing = -1.0;
        assert!(matches!(
            generate_hex_mesh(&params),
            Err(LayoutError::Negative { name: "hex spacing", .. })
        ));
    }
}
