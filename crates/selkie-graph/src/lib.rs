#![forbid(unsafe_code)]

//! Portal graph data model.
//!
//! A map is a set of convex cells joined by paired, directed portals. This crate owns the
//! immutable graph, its per-cell adjacency index, and the counter-clockwise portal order that
//! the visibility and layout crates traverse.

pub mod error;
pub mod fixtures;
pub mod geom;
pub mod graph;
pub mod order;
pub mod set;

pub use error::{Error, Result};
pub use geom::{Line, Point, Vector, point, vector};
pub use graph::{AdjacencyIndex, Boundary, MapDocument, PortalGraph};
pub use order::{CcpOrder, counter_clockwise_order, portal_angle};
pub use set::PortalSet;

/// Derives the adjacency index for paired input. Equivalent to [`PortalGraph::new`] followed by
/// [`PortalGraph::adjacency`].
pub fn build_adjacency(
    cells: Vec<Vec<Point>>,
    portals: Vec<Line>,
    connectivity: Vec<(usize, usize)>,
) -> Result<AdjacencyIndex> {
    PortalGraph::new(cells, portals, connectivity).map(|g| g.adjacency().clone())
}
