use super::{CrossingItem, minimize_crossings};
use crate::error::{Error, Result};
use selkie_graph::{CcpOrder, PortalGraph};
use serde::Serialize;

/// Where one path step crosses its portal: `slot` of `count` parallel lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Slot {
    pub slot: usize,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PathLayout {
    /// One entry per path step.
    pub slots: Vec<Slot>,
    /// Per boundary (portal pair `2k`/`2k + 1` at index `k`), the crossing steps in lane order.
    pub orders: Vec<Vec<usize>>,
}

impl PathLayout {
    /// Lane position of `step` within its boundary's order, before odd-portal mirroring.
    pub fn position(&self, path: &[usize], step: usize) -> Option<usize> {
        let pair = path.get(step)? / 2;
        self.orders.get(pair)?.iter().position(|&s| s == step)
    }
}

pub fn layout(graph: &PortalGraph, ccp: &CcpOrder, path: &[usize]) -> Result<PathLayout> {
    let portal_count = graph.portal_count();
    let mut orders: Vec<Vec<usize>> = vec![Vec::new(); portal_count / 2];
    for (step, &portal) in path.iter().enumerate() {
        if portal >= portal_count {
            return Err(Error::InvalidPath {
                step,
                portal,
                portal_count,
            });
        }
        orders[portal / 2].push(step);
    }

    for (pair, steps) in orders.iter_mut().enumerate() {
        if steps.len() <= 1 {
            continue;
        }
        let even = 2 * pair;
        let ahead: Vec<usize> = ccp.get(even).iter().rev().copied().collect();
        let behind = ccp.get(even + 1);

        let items: Vec<CrossingItem> = steps
            .iter()
            .map(|&step| crossing_item(path, step, even, &ahead, behind))
            .collect();
        tracing::trace!(portal = even, ?items, "crossing items");

        *steps = minimize_crossings(items)
            .into_iter()
            .map(|item| item.step)
            .collect();
        tracing::debug!(portal = even, order = ?steps, "ordered boundary crossings");
    }

    let mut slots = vec![Slot::default(); path.len()];
    for steps in &orders {
        let count = steps.len();
        for (pos, &step) in steps.iter().enumerate() {
            let slot = if path[step] & 1 == 1 {
                count - 1 - pos
            } else {
                pos
            };
            slots[step] = Slot { slot, count };
        }
    }

    Ok(PathLayout { slots, orders })
}

fn crossing_item(
    path: &[usize],
    step: usize,
    even: usize,
    ahead: &[usize],
    behind: &[usize],
) -> CrossingItem {
    let prev = step.checked_sub(1).map(|s| path[s]);
    let next = path.get(step + 1).copied();

    let (ahead_seek, behind_seek) = if path[step] == even {
        (prev.map(|o| o ^ 1), next.map(|q| q ^ 1))
    } else {
        (next, prev)
    };

    CrossingItem {
        ahead: rank(ahead, ahead_seek),
        behind: rank(behind, behind_seek),
        step,
    }
}

fn rank(order: &[usize], seek: Option<usize>) -> Option<usize> {
    let seek = seek?;
    order.iter().position(|&p| p == seek)
}
