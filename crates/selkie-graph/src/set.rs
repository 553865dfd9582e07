//! Fixed-capacity sets of portal indices.

use serde::{Serialize, Serializer};

const WORD_BITS: usize = 64;

/// A bitset over `0..capacity`. Iteration is always ascending, so anything derived from a set
/// is deterministic.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PortalSet {
    capacity: usize,
    words: Vec<u64>,
}

impl PortalSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            words: vec![0; capacity.div_ceil(WORD_BITS)],
        }
    }

    pub fn from_portals(capacity: usize, portals: impl IntoIterator<Item = usize>) -> Self {
        let mut set = Self::new(capacity);
        for p in portals {
            set.insert(p);
        }
        set
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if `p` was not present yet.
    pub fn insert(&mut self, p: usize) -> bool {
        assert!(
            p < self.capacity,
            "portal {p} outside set capacity {}",
            self.capacity
        );
        let (w, bit) = (p / WORD_BITS, 1u64 << (p % WORD_BITS));
        let fresh = self.words[w] & bit == 0;
        self.words[w] |= bit;
        fresh
    }

    pub fn remove(&mut self, p: usize) -> bool {
        if p >= self.capacity {
            return false;
        }
        let (w, bit) = (p / WORD_BITS, 1u64 << (p % WORD_BITS));
        let present = self.words[w] & bit != 0;
        self.words[w] &= !bit;
        present
    }

    pub fn contains(&self, p: usize) -> bool {
        p < self.capacity && self.words[p / WORD_BITS] & (1u64 << (p % WORD_BITS)) != 0
    }

    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    pub fn intersection(&self, other: &PortalSet) -> PortalSet {
        self.zip_with(other, |a, b| a & b)
    }

    pub fn difference(&self, other: &PortalSet) -> PortalSet {
        self.zip_with(other, |a, b| a & !b)
    }

    pub fn union(&self, other: &PortalSet) -> PortalSet {
        self.zip_with(other, |a, b| a | b)
    }

    /// `self ∩ other − exclude` is non-empty, without allocating.
    pub fn intersects_excluding(&self, other: &PortalSet, exclude: &PortalSet) -> bool {
        self.words
            .iter()
            .enumerate()
            .any(|(i, &a)| a & word(other, i) & !word(exclude, i) != 0)
    }

    pub fn is_subset(&self, other: &PortalSet) -> bool {
        self.words
            .iter()
            .enumerate()
            .all(|(i, &a)| a & !word(other, i) == 0)
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(i, &w)| {
            let mut rest = w;
            std::iter::from_fn(move || {
                if rest == 0 {
                    return None;
                }
                let bit = rest.trailing_zeros() as usize;
                rest &= rest - 1;
                Some(i * WORD_BITS + bit)
            })
        })
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }

    fn zip_with(&self, other: &PortalSet, f: impl Fn(u64, u64) -> u64) -> PortalSet {
        let words = self
            .words
            .iter()
            .enumerate()
            .map(|(i, &a)| f(a, word(other, i)))
            .collect();
        PortalSet {
            capacity: self.capacity,
            words,
        }
    }
}

fn word(set: &PortalSet, i: usize) -> u64 {
    set.words.get(i).copied().unwrap_or(0)
}

impl std::fmt::Debug for PortalSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Serialize for PortalSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
