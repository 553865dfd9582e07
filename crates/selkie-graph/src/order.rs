//! Counter-clockwise portal order ("ccp").
//!
//! For every portal `p`, the portals leaving the cell `p` enters (minus the way back, `p ^ 1`),
//! sorted by where they appear when standing on `p` and looking into the cell. Traversals and
//! the crossing minimizer both read this as their canonical neighbour order.

use crate::geom::{Line, rot90};
use crate::graph::PortalGraph;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CcpOrder {
    order: Vec<Vec<usize>>,
}

impl CcpOrder {
    pub fn get(&self, p: usize) -> &[usize] {
        &self.order[p]
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[usize]> {
        self.order.iter().map(Vec::as_slice)
    }

    pub fn into_inner(self) -> Vec<Vec<usize>> {
        self.order
    }
}

/// Sort key of `q` as seen from `p`: the midpoint of `q` projected on `p`'s axis, divided by its
/// projection on `p`'s normal.
///
/// This is a cotangent-like ratio, not an angle, and it jumps from `+inf` to `-inf` where the
/// midpoint crosses `p`'s line. Equal keys (including two infinities of the same sign) keep
/// portal index order.
pub fn portal_angle(p: &Line, q: &Line) -> f64 {
    let pdel = p.delta();
    let qrel = q.midpoint() - p.from;
    qrel.dot(pdel) / qrel.dot(rot90(pdel))
}

// A midpoint sitting exactly on `p.from` gives 0/0; park it after everything else so the
// comparator stays a total preorder.
fn sort_key(angle: f64) -> f64 {
    if angle.is_nan() { f64::INFINITY } else { angle }
}

pub fn counter_clockwise_order(graph: &PortalGraph) -> CcpOrder {
    let order: Vec<Vec<usize>> = (0..graph.portal_count())
        .map(|p| {
            let from = graph.portal(p);
            let mut keyed: Vec<(f64, usize)> = graph
                .portals_exit(graph.destination(p))
                .iter()
                .copied()
                .filter(|&q| q != p ^ 1)
                .map(|q| (sort_key(portal_angle(from, graph.portal(q))), q))
                .collect();
            keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
            let sorted: Vec<usize> = keyed.into_iter().map(|(_, q)| q).collect();
            tracing::trace!(portal = p, sees = ?sorted, "ccp");
            sorted
        })
        .collect();
    CcpOrder { order }
}
