//! Arc computation for many consecutive pairs at once
//!
//! Each arc depends only on its two endpoints, so pairs are computed on
//! the rayon pool and collected back in index order.

use rayon::prelude::*;

use crate::arc::GeodesicArc;
use crate::error::Result;
use crate::geodesic::GeodesicEngine;
use crate::point::Point3d;

/// Below this many pairs the sequential path is used
pub const PARALLEL_THRESHOLD: usize = 64;

/// Compute the arcs between every consecutive pair of `points`.
///
/// Returns `points.len() - 1` arcs (none for fewer than two points).
pub fn compute_path_arcs(engine: &GeodesicEngine, points: &[Point3d]) -> Result<Vec<GeodesicArc>> {
    if points.len() <= PARALLEL_THRESHOLD {
        return compute_path_arcs_sequential(engine, points);
    }

    points
        .par_windows(2)
        .map(|pair| engine.compute(&pair[0], &pair[1]))
        .collect()
}

/// Single-threaded version of [`compute_path_arcs`]
pub fn compute_path_arcs_sequential(
    engine: &GeodesicEngine,
    points: &[Point3d],
) -> Result<Vec<GeodesicArc>> {
    points
        .windows(2)
        .map(|pair| engine.compute(&pair[0], &pair[1]))
        .collect()
}
