//! A loaded map together with everything derived from it.

use crate::config::EngineOptions;
use crate::error::Result;
use selkie_graph::{CcpOrder, MapDocument, PortalGraph, PortalSet, counter_clockwise_order};
use selkie_layout::{BundleCurve, CrossingPoint, PathLayout};
use selkie_vis::{FloodOutcome, FloodSets, FlowOutcome, Limit};
use std::sync::OnceLock;

/// Immutable once built; load a different map by building a new scene.
#[derive(Debug)]
pub struct Scene {
    graph: PortalGraph,
    ccp: CcpOrder,
    flood_sets: OnceLock<FloodSets>,
    options: EngineOptions,
}

impl Scene {
    pub fn new(graph: PortalGraph) -> Self {
        Self::with_options(graph, EngineOptions::default())
    }

    pub fn with_options(graph: PortalGraph, options: EngineOptions) -> Self {
        let ccp = counter_clockwise_order(&graph);
        tracing::debug!(
            cells = graph.cell_count(),
            portals = graph.portal_count(),
            "scene loaded"
        );
        Self {
            graph,
            ccp,
            flood_sets: OnceLock::new(),
            options,
        }
    }

    pub fn from_document(document: MapDocument, options: EngineOptions) -> Result<Self> {
        Ok(Self::with_options(document.into_graph()?, options))
    }

    pub fn graph(&self) -> &PortalGraph {
        &self.graph
    }

    pub fn ccp(&self) -> &CcpOrder {
        &self.ccp
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Per-portal flood sets, computed on first use.
    pub fn flood_sets(&self) -> &FloodSets {
        self.flood_sets
            .get_or_init(|| FloodSets::compute(&self.graph, &self.ccp))
    }

    pub fn front_set(&self, start: usize) -> Result<PortalSet> {
        self.graph.check_portal(start)?;
        Ok(selkie_vis::front_set(&self.graph, start)?)
    }

    pub fn flood(&self, start: usize, limit: Limit) -> Result<FloodOutcome> {
        let front = self.front_set(start)?;
        Ok(selkie_vis::flood(
            &self.graph,
            &self.ccp,
            start,
            &front,
            limit,
        )?)
    }

    pub fn flow(&self, start: usize, limit: Limit) -> Result<FlowOutcome> {
        self.graph.check_portal(start)?;
        Ok(selkie_vis::flow(
            &self.graph,
            &self.ccp,
            self.flood_sets(),
            start,
            limit,
            &self.options.flow,
        )?)
    }

    pub fn layout(&self, path: &[usize]) -> Result<PathLayout> {
        Ok(selkie_layout::layout(&self.graph, &self.ccp, path)?)
    }

    pub fn bundle_points(&self, path: &[usize]) -> Result<Vec<CrossingPoint>> {
        let layout = self.layout(path)?;
        Ok(selkie_layout::bundle_points(
            &self.graph,
            &layout,
            path,
            self.options.bundle.spacing,
        )?)
    }

    /// `None` for an empty path.
    pub fn bundle_curve(&self, path: &[usize]) -> Result<Option<BundleCurve>> {
        let points = self.bundle_points(path)?;
        Ok(selkie_layout::bundle_curve(&points, &self.options.bundle))
    }
}
