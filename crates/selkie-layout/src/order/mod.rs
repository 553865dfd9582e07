//! Slot ordering for co-crossing path steps.
//!
//! Every boundary crossed by two or more steps gets an order; the steps are scored against the
//! ccp orders on both sides of the boundary and inserted greedily.

mod cross_count;
pub use cross_count::crossing_score;

mod insertion;
pub use insertion::{CrossingItem, best_insert, minimize_crossings};

mod slots;
pub use slots::{PathLayout, Slot, layout};
