//! Built-in sample maps.

use crate::geom::{Line, line, point, rect_polygon};
use crate::graph::{Boundary, PortalGraph};

/// The seven-room sample map: an L of rooms `0 -> 1 -> 2 -> 4` on top, `0 -> 3` down the left,
/// a closet `5` east of `4`, and a corridor `6` along the bottom joining `3` and `4`.
pub fn map1() -> PortalGraph {
    let cells = vec![
        rect_polygon(0.0, 0.0, 3.0, 4.0),
        rect_polygon(3.0, 0.0, 5.0, 2.0),
        rect_polygon(5.0, 1.0, 7.0, 4.0),
        rect_polygon(1.0, 4.0, 3.0, 6.0),
        rect_polygon(5.0, 4.0, 7.0, 6.0),
        rect_polygon(7.0, 4.0, 8.0, 6.0),
        rect_polygon(1.0, 6.0, 7.0, 8.0),
    ];
    let boundaries = [
        (line((3.0, 2.0), (3.0, 0.0)), (0, 1)),
        (line((5.0, 2.0), (5.0, 1.0)), (1, 2)),
        (line((1.0, 4.0), (3.0, 4.0)), (0, 3)),
        (line((5.0, 4.0), (7.0, 4.0)), (2, 4)),
        (line((7.0, 6.0), (7.0, 4.0)), (4, 5)),
        (line((1.0, 6.0), (3.0, 6.0)), (3, 6)),
        (line((5.0, 6.0), (7.0, 6.0)), (4, 6)),
    ]
    .map(|(portal, cells)| Boundary { portal, cells });

    PortalGraph::from_boundaries(cells, &boundaries)
        .unwrap_or_else(|err| panic!("built-in map1 is malformed: {err}"))
}

/// The demo path drawn over [`map1`].
pub const MAP1_PATH: [usize; 18] = [6, 9, 8, 12, 11, 10, 13, 7, 2, 3, 6, 9, 8, 7, 2, 0, 4, 10];

/// A `cols x rows` grid of unit squares; every pair of side-adjacent squares shares a portal.
///
/// Cell `(c, r)` has index `r * cols + c`. Horizontal neighbours are listed before vertical ones.
pub fn grid(cols: usize, rows: usize) -> PortalGraph {
    let cell = |c: usize, r: usize| r * cols + c;
    let mut cells = Vec::with_capacity(cols * rows);
    for r in 0..rows {
        for c in 0..cols {
            let (x, y) = (c as f64, r as f64);
            cells.push(rect_polygon(x, y, x + 1.0, y + 1.0));
        }
    }

    let mut boundaries = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            let (x, y) = (c as f64, r as f64);
            if c + 1 < cols {
                boundaries.push(Boundary {
                    portal: Line::new(point(x + 1.0, y + 1.0), point(x + 1.0, y)),
                    cells: (cell(c, r), cell(c + 1, r)),
                });
            }
            if r + 1 < rows {
                boundaries.push(Boundary {
                    portal: Line::new(point(x, y + 1.0), point(x + 1.0, y + 1.0)),
                    cells: (cell(c, r), cell(c, r + 1)),
                });
            }
        }
    }

    PortalGraph::from_boundaries(cells, &boundaries)
        .unwrap_or_else(|err| panic!("generated grid is malformed: {err}"))
}
