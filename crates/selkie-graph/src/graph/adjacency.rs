//! Per-cell portal lists used by [`PortalGraph`](super::PortalGraph).
//!
//! Both directions are stored in compressed form: `offsets[c]..offsets[c + 1]` slices the flat
//! portal array for cell `c`. Portals inside a slice keep ascending index order, which the
//! counter-clockwise sort relies on as its tie-break.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyIndex {
    enter_offsets: Vec<usize>,
    enter: Vec<usize>,
    exit_offsets: Vec<usize>,
    exit: Vec<usize>,
}

impl AdjacencyIndex {
    /// Builds the index with a single scan over `connectivity`.
    ///
    /// Callers must have checked that every cell index is `< cell_count`.
    pub(crate) fn build(cell_count: usize, connectivity: &[(usize, usize)]) -> Self {
        let mut enter_counts = vec![0usize; cell_count];
        let mut exit_counts = vec![0usize; cell_count];
        for &(source, destination) in connectivity {
            exit_counts[source] += 1;
            enter_counts[destination] += 1;
        }

        let enter_offsets = prefix_offsets(&enter_counts);
        let exit_offsets = prefix_offsets(&exit_counts);

        let mut enter = vec![0usize; connectivity.len()];
        let mut exit = vec![0usize; connectivity.len()];
        let mut enter_fill = enter_offsets.clone();
        let mut exit_fill = exit_offsets.clone();
        for (portal, &(source, destination)) in connectivity.iter().enumerate() {
            exit[exit_fill[source]] = portal;
            exit_fill[source] += 1;
            enter[enter_fill[destination]] = portal;
            enter_fill[destination] += 1;
        }

        Self {
            enter_offsets,
            enter,
            exit_offsets,
            exit,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.exit_offsets.len().saturating_sub(1)
    }

    /// Portals whose destination is `cell`.
    pub fn portals_enter(&self, cell: usize) -> &[usize] {
        let start = self.enter_offsets[cell];
        let end = self.enter_offsets[cell + 1];
        &self.enter[start..end]
    }

    /// Portals whose source is `cell`.
    pub fn portals_exit(&self, cell: usize) -> &[usize] {
        let start = self.exit_offsets[cell];
        let end = self.exit_offsets[cell + 1];
        &self.exit[start..end]
    }
}

fn prefix_offsets(counts: &[usize]) -> Vec<usize> {
    let mut offsets = Vec::with_capacity(counts.len() + 1);
    let mut acc = 0usize;
    offsets.push(0);
    for &c in counts {
        acc += c;
        offsets.push(acc);
    }
    offsets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_portals_by_cell_in_index_order() {
        let conn = [(0, 1), (1, 0), (1, 2), (2, 1)];
        let idx = AdjacencyIndex::build(3, &conn);
        assert_eq!(idx.cell_count(), 3);
        assert_eq!(idx.portals_exit(0), &[0]);
        assert_eq!(idx.portals_exit(1), &[1, 2]);
        assert_eq!(idx.portals_exit(2), &[3]);
        assert_eq!(idx.portals_enter(1), &[0, 3]);
        assert_eq!(idx.portals_enter(0), &[1]);
    }

    #[test]
    fn isolated_cells_have_empty_slices() {
        let idx = AdjacencyIndex::build(2, &[]);
        assert!(idx.portals_enter(0).is_empty());
        assert!(idx.portals_exit(1).is_empty());
    }
}
