//! Per-step classification of every cell and portal, for stepping through a traversal.
//!
//! A snapshot at `step` replays the traversal with a limit of `step + 1` entries.

use crate::error::Result;
use crate::scene::Scene;
use selkie_graph::Line;
use selkie_vis::Limit;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SnapshotMode {
    Flood,
    Flow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellMarks {
    pub can_see: bool,
    pub confirmed: bool,
    /// Visible but not confirmed yet (flow only).
    pub todo: bool,
    /// One step from the cell the trace ended in (flow only).
    pub next: bool,
    /// Visible from the focus portal; `None` without a focus.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_visible: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalMarks {
    pub entry: bool,
    /// Passes the start portal's front check (flood only).
    pub front: bool,
    pub confirmed: bool,
    pub todo: bool,
    pub can_see: bool,
    pub on_stack: bool,
}

/// Straight line from the start portal to the portal the trace ended on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SightLine {
    pub source: Line,
    pub target: Line,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub mode: SnapshotMode,
    pub start: usize,
    pub step: usize,
    pub cells: Vec<CellMarks>,
    pub portals: Vec<PortalMarks>,
    pub trace: Vec<usize>,
    pub stack: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sight_line: Option<SightLine>,
}

impl Scene {
    pub fn flood_snapshot(&self, start: usize, step: usize) -> Result<Snapshot> {
        let graph = self.graph();
        let front = self.front_set(start)?;
        let out = self.flood(start, Limit::Steps(step.saturating_add(1)))?;

        let front_cells = graph.summarize_cells(front.iter());
        let flood_cells = graph.summarize_cells(out.visited.iter());
        let in_trace: BTreeSet<usize> = out.trace.iter().copied().collect();

        let cells = (0..graph.cell_count())
            .map(|c| CellMarks {
                can_see: front_cells.contains(&c),
                confirmed: flood_cells.contains(&c),
                ..CellMarks::default()
            })
            .collect();
        let portals = (0..graph.portal_count())
            .map(|p| PortalMarks {
                entry: p == start,
                front: front.contains(p),
                confirmed: in_trace.contains(&p),
                ..PortalMarks::default()
            })
            .collect();

        Ok(Snapshot {
            mode: SnapshotMode::Flood,
            start,
            step,
            cells,
            portals,
            trace: out.trace,
            stack: vec![start],
            sight_line: None,
        })
    }

    /// With `focus_cell` adjacent to the cell the trace ended in, the portal leading there is
    /// pushed onto the stack and cells are also marked by what that portal can see.
    pub fn flow_snapshot(
        &self,
        start: usize,
        step: usize,
        focus_cell: Option<usize>,
    ) -> Result<Snapshot> {
        let graph = self.graph();
        let out = self.flow(start, Limit::Steps(step.saturating_add(1)))?;
        let flood = self.flood_sets().get(start);

        let can_see_cells = graph.summarize_cells(out.cansee.iter());
        let confirmed_cells = graph.summarize_cells(out.confirmed.iter());

        let mut stack = out.stack;
        let mut next_cells = BTreeSet::new();
        let mut focus_cells = None;
        let mut sight_line = None;

        if let Some(&last) = out.trace.last() {
            let last_cell = graph.destination(last);
            next_cells = graph
                .portals_exit(last_cell)
                .iter()
                .filter(|&&p| p != last ^ 1)
                .map(|&p| graph.destination(p))
                .collect();

            let focus_portal = focus_cell.and_then(|cell| {
                graph
                    .portals_exit(last_cell)
                    .iter()
                    .rev()
                    .copied()
                    .find(|&p| graph.destination(p) == cell)
            });
            let mut target = last;
            if let Some(portal) = focus_portal {
                focus_cells = Some(graph.summarize_cells(self.flood_sets().get(portal).iter()));
                stack.push(portal);
                target = portal;
            }
            sight_line = Some(SightLine {
                source: *graph.portal(start),
                target: *graph.portal(target),
            });
        }

        let cells = (0..graph.cell_count())
            .map(|c| {
                let confirmed = confirmed_cells.contains(&c);
                let can_see = can_see_cells.contains(&c);
                CellMarks {
                    can_see,
                    confirmed,
                    todo: can_see && !confirmed,
                    next: next_cells.contains(&c),
                    focus_visible: focus_cells.as_ref().map(|cells| cells.contains(&c)),
                }
            })
            .collect();
        let portals = (0..graph.portal_count())
            .map(|p| {
                let confirmed = out.confirmed.contains(p);
                PortalMarks {
                    entry: p == start,
                    front: false,
                    confirmed,
                    todo: !confirmed && flood.contains(p),
                    can_see: out.cansee.contains(p),
                    on_stack: stack.contains(&p),
                }
            })
            .collect();

        Ok(Snapshot {
            mode: SnapshotMode::Flow,
            start,
            step,
            cells,
            portals,
            trace: out.trace,
            stack,
            sight_line,
        })
    }
}
