//! Offset crossing points and cubic segments for a laid-out path.

use crate::error::{Error, Result};
use crate::order::PathLayout;
use selkie_graph::geom::rot90;
use selkie_graph::{Line, Point, PortalGraph, Vector, vector};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleOptions {
    /// Distance between neighbouring lanes on a portal.
    pub spacing: f64,
    /// Control-point offset along each endpoint's normal.
    pub curve_tension: f64,
    /// How far segment endpoints are pulled off the portal line.
    pub deflate: f64,
}

impl Default for BundleOptions {
    fn default() -> Self {
        Self {
            spacing: 0.3,
            curve_tension: 0.3,
            deflate: 0.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CrossingPoint {
    pub position: Point,
    /// Unit normal of the crossed portal, pointing into the cell it enters.
    pub normal: Vector,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CubicSegment {
    pub from: Point,
    pub ctrl1: Point,
    pub ctrl2: Point,
    pub to: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BundleCurve {
    pub start: Point,
    pub segments: Vec<CubicSegment>,
}

/// Places lane `slot` of `count` on `line`.
///
/// The bundle is centred on the line, never narrower than one `spacing` and never wider than
/// `(count - 1) * spacing`. With two or fewer lanes every lane sits at the centre.
pub fn crossing_point(line: &Line, slot: usize, count: usize, spacing: f64) -> CrossingPoint {
    let delta = line.delta();
    let length = delta.length();
    let unit = if length > 0.0 {
        delta / length
    } else {
        vector(0.0, 0.0)
    };

    let lanes = count.saturating_sub(1) as f64;
    let bundle_width = (length - 2.0 * spacing).max(spacing).min(lanes * spacing);
    let mut offset = (length - bundle_width) / 2.0;
    if count > 2 {
        offset += slot as f64 * (bundle_width / lanes);
    }

    CrossingPoint {
        position: line.from + unit * offset,
        normal: rot90(unit),
    }
}

pub fn bundle_points(
    graph: &PortalGraph,
    layout: &PathLayout,
    path: &[usize],
    spacing: f64,
) -> Result<Vec<CrossingPoint>> {
    if layout.slots.len() != path.len() {
        return Err(Error::LayoutMismatch {
            layout_len: layout.slots.len(),
            path_len: path.len(),
        });
    }

    path.iter()
        .zip(&layout.slots)
        .map(|(&portal, slot)| {
            graph.check_portal(portal)?;
            Ok(crossing_point(
                graph.portal(portal),
                slot.slot,
                slot.count,
                spacing,
            ))
        })
        .collect()
}

/// Joins consecutive crossing points with cubic segments. `None` for an empty path.
pub fn bundle_curve(points: &[CrossingPoint], options: &BundleOptions) -> Option<BundleCurve> {
    let first = points.first()?;
    let segments = points
        .windows(2)
        .map(|pair| {
            let (prev, curr) = (&pair[0], &pair[1]);
            let from = prev.position + prev.normal * options.deflate;
            let to = curr.position - curr.normal * options.deflate;
            CubicSegment {
                from,
                ctrl1: from + prev.normal * options.curve_tension,
                ctrl2: to - curr.normal * options.curve_tension,
                to,
            }
        })
        .collect();

    Some(BundleCurve {
        start: first.position + first.normal * options.deflate,
        segments,
    })
}
