//! Flow: flood refined by transitive visibility and a confirmed set.
//!
//! Each frame carries the portals still visible from the start through every portal on the
//! current stack (`cansee`, narrowed by each portal's flood set). A shared `confirmed` set
//! records portals whose visibility no longer needs expanding; a neighbour whose narrowed
//! `cansee` holds nothing unconfirmed is skipped.

use crate::error::Result;
use crate::limit::{Limit, Trace};
use crate::pvs::FloodSets;
use selkie_graph::{CcpOrder, PortalGraph, PortalSet};
use std::ops::ControlFlow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowPasses {
    /// One pass, whatever happens to the confirmed set.
    #[default]
    Single,
    /// Repeat passes while the confirmed set keeps growing, up to `max_passes`.
    UntilStable { max_passes: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowOptions {
    /// On entering `p`, also confirm every neighbour of `p` that is still in `cansee`, and
    /// skip neighbours with nothing left to discover even if they are not confirmed yet.
    pub eager_marking: bool,
    pub passes: FlowPasses,
}

impl Default for FlowOptions {
    fn default() -> Self {
        Self {
            eager_marking: true,
            passes: FlowPasses::Single,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowOutcome {
    /// Visibility set of the frame that ended the run: `flood[start]` when the run completes,
    /// the narrowed set of the frame that emitted the last entry when the limit cut it short.
    pub cansee: PortalSet,
    pub confirmed: PortalSet,
    /// Portals on the recursion path of that same frame, start first.
    pub stack: Vec<usize>,
    pub trace: Vec<usize>,
    pub passes: usize,
}

impl FlowOutcome {
    pub fn is_truncated(&self, limit: Limit) -> bool {
        limit.is_reached(self.trace.len())
    }
}

struct Frame {
    portal: usize,
    cansee: PortalSet,
    next: usize,
}

/// State a pass stops in.
struct Stop {
    cansee: PortalSet,
    stack: Vec<usize>,
}

pub fn flow(
    graph: &PortalGraph,
    ccp: &CcpOrder,
    flood_sets: &FloodSets,
    start: usize,
    limit: Limit,
    options: &FlowOptions,
) -> Result<FlowOutcome> {
    graph.check_portal(start)?;
    let n = graph.portal_count();
    let initial = flood_sets.get(start).clone();
    let mut confirmed = PortalSet::new(n);
    let mut trace = Trace::new(limit);

    let max_passes = match options.passes {
        FlowPasses::Single => 1,
        FlowPasses::UntilStable { max_passes } => max_passes.max(1),
    };

    let mut passes = 0;
    let mut confirmed_count = 0;
    let mut last = Stop {
        cansee: initial.clone(),
        stack: vec![start],
    };
    while passes < max_passes && !trace.is_full() {
        passes += 1;
        let mut pass = Pass {
            ccp,
            flood_sets,
            eager: options.eager_marking,
            confirmed: &mut confirmed,
            trace: &mut trace,
            on_stack: PortalSet::new(n),
            frames: Vec::new(),
        };
        last = match pass.run(start, initial.clone()) {
            ControlFlow::Break(stop) => stop,
            ControlFlow::Continue(()) => Stop {
                cansee: initial.clone(),
                stack: vec![start],
            },
        };

        let now = confirmed.len();
        tracing::debug!(pass = passes, confirmed = now, "flow pass finished");
        if now == confirmed_count {
            break;
        }
        confirmed_count = now;
    }

    Ok(FlowOutcome {
        cansee: last.cansee,
        confirmed,
        stack: last.stack,
        trace: trace.into_steps(),
        passes,
    })
}

struct Pass<'a> {
    ccp: &'a CcpOrder,
    flood_sets: &'a FloodSets,
    eager: bool,
    confirmed: &'a mut PortalSet,
    trace: &'a mut Trace,
    on_stack: PortalSet,
    frames: Vec<Frame>,
}

impl Pass<'_> {
    fn run(&mut self, start: usize, cansee: PortalSet) -> ControlFlow<Stop> {
        self.enter(start, cansee)?;

        while let Some(frame) = self.frames.last_mut() {
            let p = frame.portal;
            let Some(&q) = self.ccp.get(p).get(frame.next) else {
                let stack = self.stack();
                let Some(done) = self.frames.pop() else {
                    break;
                };
                self.on_stack.remove(p);
                if self.trace.push(p ^ 1).is_break() {
                    return ControlFlow::Break(Stop {
                        cansee: done.cansee,
                        stack,
                    });
                }
                continue;
            };
            frame.next += 1;

            if !frame.cansee.contains(q) || self.on_stack.contains(q) {
                continue;
            }
            let qflood = self.flood_sets.get(q);
            let wants_more = frame.cansee.intersects_excluding(qflood, self.confirmed);
            if !wants_more && (self.eager || self.confirmed.contains(q)) {
                continue;
            }
            let qcansee = frame.cansee.intersection(qflood);
            self.enter(q, qcansee)?;
        }

        ControlFlow::Continue(())
    }

    fn enter(&mut self, p: usize, cansee: PortalSet) -> ControlFlow<Stop> {
        tracing::trace!(portal = p, depth = self.frames.len() + 1, "flow enter");
        if self.trace.push(p).is_break() {
            let mut stack = self.stack();
            stack.push(p);
            return ControlFlow::Break(Stop { cansee, stack });
        }

        self.confirmed.insert(p);
        if self.eager {
            for &q in self.ccp.get(p) {
                if cansee.contains(q) {
                    self.confirmed.insert(q);
                }
            }
        }
        self.on_stack.insert(p);
        self.frames.push(Frame {
            portal: p,
            cansee,
            next: 0,
        });
        ControlFlow::Continue(())
    }

    fn stack(&self) -> Vec<usize> {
        self.frames.iter().map(|f| f.portal).collect()
    }
}
