//! The portal graph container.
//!
//! Portals are stored in paired form: `2k` and `2k + 1` are the two directions of one boundary,
//! so `p ^ 1` is always the reverse of `p`. The graph is immutable once built; loading a
//! different map means building a new graph.

mod adjacency;

pub use adjacency::AdjacencyIndex;

use crate::error::{Error, Result};
use crate::geom::{Line, Point, point};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct PortalGraph {
    cells: Vec<Vec<Point>>,
    portals: Vec<Line>,
    connectivity: Vec<(usize, usize)>,
    adjacency: AdjacencyIndex,
}

/// One undirected boundary, as authored: the portal leading from `cells.0` to `cells.1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundary {
    pub portal: Line,
    pub cells: (usize, usize),
}

impl PortalGraph {
    /// Validates paired input and derives the adjacency index.
    pub fn new(
        cells: Vec<Vec<Point>>,
        portals: Vec<Line>,
        connectivity: Vec<(usize, usize)>,
    ) -> Result<Self> {
        validate(cells.len(), &portals, &connectivity)?;
        let adjacency = AdjacencyIndex::build(cells.len(), &connectivity);
        tracing::debug!(
            cells = cells.len(),
            portals = portals.len(),
            "built portal graph"
        );
        Ok(Self {
            cells,
            portals,
            connectivity,
            adjacency,
        })
    }

    /// Doubles one entry per boundary into paired form.
    pub fn from_boundaries(cells: Vec<Vec<Point>>, boundaries: &[Boundary]) -> Result<Self> {
        let mut portals = Vec::with_capacity(boundaries.len() * 2);
        let mut connectivity = Vec::with_capacity(boundaries.len() * 2);
        for b in boundaries {
            portals.push(b.portal);
            portals.push(b.portal.reversed());
            connectivity.push(b.cells);
            connectivity.push((b.cells.1, b.cells.0));
        }
        Self::new(cells, portals, connectivity)
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn portal_count(&self) -> usize {
        self.portals.len()
    }

    pub fn cells(&self) -> &[Vec<Point>] {
        &self.cells
    }

    pub fn portals(&self) -> &[Line] {
        &self.portals
    }

    pub fn connectivity(&self) -> &[(usize, usize)] {
        &self.connectivity
    }

    pub fn adjacency(&self) -> &AdjacencyIndex {
        &self.adjacency
    }

    pub fn portal(&self, p: usize) -> &Line {
        &self.portals[p]
    }

    /// The cell `p` leaves.
    pub fn source(&self, p: usize) -> usize {
        self.connectivity[p].0
    }

    /// The cell `p` enters.
    pub fn destination(&self, p: usize) -> usize {
        self.connectivity[p].1
    }

    pub fn portals_enter(&self, cell: usize) -> &[usize] {
        self.adjacency.portals_enter(cell)
    }

    pub fn portals_exit(&self, cell: usize) -> &[usize] {
        self.adjacency.portals_exit(cell)
    }

    pub fn check_portal(&self, p: usize) -> Result<usize> {
        if p < self.portals.len() {
            Ok(p)
        } else {
            Err(Error::UnknownPortal {
                portal: p,
                portal_count: self.portals.len(),
            })
        }
    }

    /// Destination cells of the given portals.
    pub fn summarize_cells(&self, portals: impl IntoIterator<Item = usize>) -> BTreeSet<usize> {
        portals.into_iter().map(|p| self.destination(p)).collect()
    }

    pub fn to_document(&self) -> MapDocument {
        MapDocument {
            cells: self
                .cells
                .iter()
                .map(|poly| poly.iter().map(|p| [p.x, p.y]).collect())
                .collect(),
            portals: self
                .portals
                .iter()
                .map(|l| [[l.from.x, l.from.y], [l.to.x, l.to.y]])
                .collect(),
            connectivity: self.connectivity.iter().map(|&(a, b)| [a, b]).collect(),
            paired: true,
        }
    }
}

fn validate(cell_count: usize, portals: &[Line], connectivity: &[(usize, usize)]) -> Result<()> {
    if portals.len() % 2 != 0 {
        return Err(Error::malformed(format!(
            "portal count {} is odd; portals must come in (p, p ^ 1) pairs",
            portals.len()
        )));
    }
    if portals.len() != connectivity.len() {
        return Err(Error::malformed(format!(
            "{} portals but {} connectivity entries",
            portals.len(),
            connectivity.len()
        )));
    }
    for (p, &(source, destination)) in connectivity.iter().enumerate() {
        if source >= cell_count || destination >= cell_count {
            return Err(Error::malformed(format!(
                "portal {p} connects cells ({source}, {destination}) but the graph has {cell_count} cells"
            )));
        }
    }
    for k in (0..portals.len()).step_by(2) {
        if portals[k + 1] != portals[k].reversed() {
            return Err(Error::malformed(format!(
                "portal {} is not the reverse of portal {k}",
                k + 1
            )));
        }
        let (a, b) = connectivity[k];
        if connectivity[k + 1] != (b, a) {
            return Err(Error::malformed(format!(
                "connectivity of portal {} is not the reverse of portal {k}",
                k + 1
            )));
        }
    }
    Ok(())
}

/// Serialized map: the in-memory graph as JSON.
///
/// With `paired == false` every portal/connectivity entry is one boundary and the loader adds
/// the reverse direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapDocument {
    #[serde(default)]
    pub cells: Vec<Vec<[f64; 2]>>,
    pub portals: Vec<[[f64; 2]; 2]>,
    pub connectivity: Vec<[usize; 2]>,
    #[serde(default)]
    pub paired: bool,
}

impl MapDocument {
    pub fn into_graph(self) -> Result<PortalGraph> {
        let cells: Vec<Vec<Point>> = self
            .cells
            .into_iter()
            .map(|poly| poly.into_iter().map(|[x, y]| point(x, y)).collect())
            .collect();
        let portals: Vec<Line> = self
            .portals
            .into_iter()
            .map(|[[ax, ay], [bx, by]]| Line::new(point(ax, ay), point(bx, by)))
            .collect();
        let connectivity: Vec<(usize, usize)> =
            self.connectivity.into_iter().map(|[a, b]| (a, b)).collect();

        if self.paired {
            return PortalGraph::new(cells, portals, connectivity);
        }
        if portals.len() != connectivity.len() {
            return Err(Error::malformed(format!(
                "{} boundaries but {} connectivity entries",
                portals.len(),
                connectivity.len()
            )));
        }
        let boundaries: Vec<Boundary> = portals
            .into_iter()
            .zip(connectivity)
            .map(|(portal, cells)| Boundary { portal, cells })
            .collect();
        PortalGraph::from_boundaries(cells, &boundaries)
    }
}
