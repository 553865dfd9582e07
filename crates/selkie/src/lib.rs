#![forbid(unsafe_code)]

//! `selkie` computes potentially-visible sets over portal graphs and lays out bundled paths.
//!
//! [`Scene`] owns a [`PortalGraph`] and its derived indices; the algorithms themselves live in
//! the `selkie-graph`, `selkie-vis` and `selkie-layout` crates and are re-exported here.
//!
//! # Features
//!
//! - `parallel` (default): compute per-portal flood sets on the rayon thread pool

pub mod config;
pub mod error;
pub mod scene;
pub mod snapshot;

pub use config::{Config, EngineOptions};
pub use error::{Error, Result};
pub use scene::Scene;
pub use snapshot::{CellMarks, PortalMarks, SightLine, Snapshot, SnapshotMode};

pub use selkie_graph as graph;
pub use selkie_layout as layout;
pub use selkie_vis as vis;

pub use selkie_graph::{
    AdjacencyIndex, Boundary, CcpOrder, Line, MapDocument, Point, PortalGraph, PortalSet, Vector,
    build_adjacency, counter_clockwise_order, fixtures, geom,
};
pub use selkie_layout::{
    BundleCurve, BundleOptions, CrossingPoint, CubicSegment, PathLayout, Slot,
};
pub use selkie_vis::{FloodOutcome, FloodSets, FlowOptions, FlowOutcome, FlowPasses, Limit};
