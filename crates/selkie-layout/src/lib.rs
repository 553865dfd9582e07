#![forbid(unsafe_code)]

//! Layout of paths that share portal crossings.
//!
//! [`layout`] orders the steps crossing each boundary so that bundled curves cross each other as
//! little as the greedy heuristic manages, and [`bundle`] turns the resulting slots into offset
//! crossing points and cubic segments.

pub mod bundle;
pub mod error;
pub mod order;

pub use bundle::{
    BundleCurve, BundleOptions, CrossingPoint, CubicSegment, bundle_curve, bundle_points,
    crossing_point,
};
pub use error::{Error, Result};
pub use order::{
    CrossingItem, PathLayout, Slot, best_insert, crossing_score, layout, minimize_crossings,
};
