use super::crossing_score;
use serde::Serialize;

/// One step crossing a boundary, with its neighbour's rank on both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossingItem {
    /// Rank in the reversed ccp order of the even portal.
    pub ahead: Option<usize>,
    /// Rank in the ccp order of the odd portal.
    pub behind: Option<usize>,
    pub step: usize,
}

/// Inserts `item` at the position with the highest score. Ties keep the earliest position.
pub fn best_insert<T, F>(items: &[T], item: T, score: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&[T]) -> i64,
{
    let mut best: Option<(i64, Vec<T>)> = None;
    for at in 0..=items.len() {
        let mut candidate = Vec::with_capacity(items.len() + 1);
        candidate.extend_from_slice(&items[..at]);
        candidate.push(item.clone());
        candidate.extend_from_slice(&items[at..]);

        let s = score(&candidate);
        if best.as_ref().is_none_or(|(best_score, _)| s > *best_score) {
            best = Some((s, candidate));
        }
    }
    best.map(|(_, items)| items).unwrap_or_default()
}

fn combined_score(items: &[CrossingItem]) -> i64 {
    let ahead: Vec<Option<usize>> = items.iter().map(|it| it.ahead).collect();
    let behind: Vec<Option<usize>> = items.iter().map(|it| it.behind).collect();
    -((crossing_score(&ahead) + crossing_score(&behind)) as i64)
}

/// Greedy insertion in input order. Not optimal; O(k^3) for `k` items with the quadratic score.
pub fn minimize_crossings(items: Vec<CrossingItem>) -> Vec<CrossingItem> {
    let mut ordered: Vec<CrossingItem> = Vec::with_capacity(items.len());
    for item in items {
        ordered = best_insert(&ordered, item, combined_score);
    }
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn best_insert_prefers_the_first_of_equal_positions() {
        let out = best_insert(&[10, 20], 15, |_| 0);
        assert_eq!(out, vec![15, 10, 20]);

        let out = best_insert(&[10, 20], 15, |xs| {
            -(xs.windows(2).filter(|w| w[0] > w[1]).count() as i64)
        });
        assert_eq!(out, vec![10, 15, 20]);
    }

    #[test]
    fn best_insert_into_empty() {
        assert_eq!(best_insert(&[], 'a', |_| 0), vec!['a']);
    }
}
