//! Naive potentially-visible-set flood.
//!
//! Depth-first walk over the ccp order that only steps into portals passing the start portal's
//! front check. The walk is driven by an explicit frame stack; frames are expanded in the same
//! order a recursive walk would visit them, so the trace is identical.

use crate::error::Result;
use crate::limit::{Limit, Trace};
use selkie_graph::{CcpOrder, PortalGraph, PortalSet};
use std::ops::ControlFlow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloodOutcome {
    /// Entered portals interleaved with `p ^ 1` close markers when the walk backs out of `p`.
    pub trace: Vec<usize>,
    /// Every portal the walk entered, including `start`.
    pub visited: PortalSet,
}

struct Frame {
    portal: usize,
    next: usize,
}

pub fn flood(
    graph: &PortalGraph,
    ccp: &CcpOrder,
    start: usize,
    front: &PortalSet,
    limit: Limit,
) -> Result<FloodOutcome> {
    graph.check_portal(start)?;
    let mut trace = Trace::new(limit);
    let mut visited = PortalSet::new(graph.portal_count());

    if !trace.is_full() {
        let _ = walk(ccp, start, front, &mut trace, &mut visited);
    }

    Ok(FloodOutcome {
        trace: trace.into_steps(),
        visited,
    })
}

/// The trace alone, for stepped playback.
pub fn flood_trace(
    graph: &PortalGraph,
    ccp: &CcpOrder,
    start: usize,
    front: &PortalSet,
    limit: Limit,
) -> Result<Vec<usize>> {
    flood(graph, ccp, start, front, limit).map(|outcome| outcome.trace)
}

fn walk(
    ccp: &CcpOrder,
    start: usize,
    front: &PortalSet,
    trace: &mut Trace,
    visited: &mut PortalSet,
) -> ControlFlow<()> {
    trace.push(start)?;
    visited.insert(start);
    let mut frames = vec![Frame {
        portal: start,
        next: 0,
    }];

    while let Some(frame) = frames.last_mut() {
        let p = frame.portal;
        let Some(&q) = ccp.get(p).get(frame.next) else {
            frames.pop();
            trace.push(p ^ 1)?;
            continue;
        };
        frame.next += 1;

        if p ^ q == 1 || !front.contains(q) || visited.contains(q) {
            continue;
        }
        trace.push(q)?;
        visited.insert(q);
        frames.push(Frame { portal: q, next: 0 });
    }

    ControlFlow::Continue(())
}
