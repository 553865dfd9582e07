//! Per-portal flood sets, the input of the flow algorithm.

use crate::error::Result;
use crate::flood::flood;
use crate::front::front_set;
use crate::limit::Limit;
use selkie_graph::{CcpOrder, PortalGraph, PortalSet};

/// `get(k)` is everything the unbounded flood from `k` enters (including `k`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloodSets {
    sets: Vec<PortalSet>,
}

impl FloodSets {
    /// Floods from every portal. Runs on the rayon pool with the `parallel` feature.
    pub fn compute(graph: &PortalGraph, ccp: &CcpOrder) -> Self {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            let sets = (0..graph.portal_count())
                .into_par_iter()
                .map(|k| flood_set(graph, ccp, k))
                .collect();
            Self::finish(sets)
        }
        #[cfg(not(feature = "parallel"))]
        {
            Self::compute_sequential(graph, ccp)
        }
    }

    pub fn compute_sequential(graph: &PortalGraph, ccp: &CcpOrder) -> Self {
        let sets = (0..graph.portal_count())
            .map(|k| flood_set(graph, ccp, k))
            .collect();
        Self::finish(sets)
    }

    pub fn from_sets(sets: Vec<PortalSet>) -> Self {
        Self { sets }
    }

    fn finish(sets: Vec<PortalSet>) -> Self {
        tracing::debug!(
            portals = sets.len(),
            entries = sets.iter().map(PortalSet::len).sum::<usize>(),
            "computed flood sets"
        );
        Self { sets }
    }

    pub fn get(&self, k: usize) -> &PortalSet {
        &self.sets[k]
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PortalSet> {
        self.sets.iter()
    }
}

fn flood_set(graph: &PortalGraph, ccp: &CcpOrder, k: usize) -> PortalSet {
    match front_set(graph, k).and_then(|front| flood(graph, ccp, k, &front, Limit::Unbounded)) {
        Ok(outcome) => outcome.visited,
        Err(err) => unreachable!("portal {k} is in range: {err}"),
    }
}

/// Flood set of a single portal, for callers that only need a few.
pub fn portal_flood_set(graph: &PortalGraph, ccp: &CcpOrder, k: usize) -> Result<PortalSet> {
    let front = front_set(graph, k)?;
    Ok(flood(graph, ccp, k, &front, Limit::Unbounded)?.visited)
}
