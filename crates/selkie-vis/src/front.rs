//! Backface culling against a portal's half-plane.

use crate::error::Result;
use selkie_graph::{Line, PortalGraph, PortalSet};

/// `true` unless both endpoints of `b` lie on or behind the line through `a`, where "behind" is
/// the side opposite `a`'s normal.
///
/// Not symmetric: `portal_front_check(a, b)` says nothing about `portal_front_check(b, a)`.
pub fn portal_front_check(a: &Line, b: &Line) -> bool {
    let n = a.normal();
    let d = a.from.to_vector().dot(n);
    let p = b.from.to_vector().dot(n);
    let q = b.to.to_vector().dot(n);
    !(p <= d && q <= d)
}

/// Every portal in front of `start`. `start` itself is never in its own front set.
pub fn front_set(graph: &PortalGraph, start: usize) -> Result<PortalSet> {
    graph.check_portal(start)?;
    let from = graph.portal(start);
    Ok(PortalSet::from_portals(
        graph.portal_count(),
        (0..graph.portal_count()).filter(|&q| portal_front_check(from, graph.portal(q))),
    ))
}
