#![forbid(unsafe_code)]

//! Potentially-visible-set computation over portal graphs.
//!
//! Two strategies share one traversal order (the graph's ccp order):
//! - [`flood`]: depth-first walk bounded by the start portal's front check.
//! - [`flow`]: the same walk narrowed through precomputed per-portal [`FloodSets`], with a
//!   confirmed set that prunes sub-walks once nothing new can be found.

pub mod error;
pub mod flood;
pub mod flow;
pub mod front;
pub mod limit;
pub mod pvs;

pub use error::{Error, Result};
pub use flood::{FloodOutcome, flood, flood_trace};
pub use flow::{FlowOptions, FlowOutcome, FlowPasses, flow};
pub use front::{front_set, portal_front_check};
pub use limit::Limit;
pub use pvs::{FloodSets, portal_flood_set};
