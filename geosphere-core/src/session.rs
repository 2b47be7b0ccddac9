//! Session state: the point and arc stores plus the engine that fills them

use log::{debug, info};

use crate::arc::GeodesicArc;
use crate::batch::compute_path_arcs;
use crate::config::SphereConfig;
use crate::error::Result;
use crate::geodesic::GeodesicEngine;
use crate::point::{Point3d, Vector3d};
use crate::sphere::Sphere;
use crate::store::{ArcStore, PointStore};

/// Read-only view of the stores for one rendered frame
#[derive(Debug, Clone, Copy)]
pub struct FrameSnapshot<'a> {
    pub points: &'a [Point3d],
    pub arcs: &'a [GeodesicArc],
    pub sphere: Sphere,
}

/// Owner of the point and arc stores
///
/// Every mutation either completes fully or leaves both stores untouched.
#[derive(Debug, Clone)]
pub struct GeodesicSession {
    engine: GeodesicEngine,
    points: PointStore,
    arcs: ArcStore,
}

impl GeodesicSession {
    /// Create an empty session with a validated configuration
    pub fn new(config: SphereConfig) -> Result<Self> {
        Ok(Self::with_engine(GeodesicEngine::from_config(&config)?))
    }

    pub fn with_engine(engine: GeodesicEngine) -> Self {
        Self {
            engine,
            points: PointStore::new(),
            arcs: ArcStore::new(),
        }
    }

    pub fn config(&self) -> SphereConfig {
        SphereConfig {
            radius: self.engine.sphere().radius(),
            resolution: self.engine.resolution(),
        }
    }

    pub fn sphere(&self) -> Sphere {
        self.engine.sphere()
    }

    pub fn engine(&self) -> &GeodesicEngine {
        &self.engine
    }

    pub fn points(&self) -> &PointStore {
        &self.points
    }

    pub fn arcs(&self) -> &ArcStore {
        &self.arcs
    }

    pub fn snapshot(&self) -> FrameSnapshot<'_> {
        FrameSnapshot {
            points: self.points.as_slice(),
            arcs: self.arcs.as_slice(),
            sphere: self.sphere(),
        }
    }

    /// Project a raw vector onto the sphere and append it.
    ///
    /// When a previous point exists, the arc from it to the new point is
    /// appended as well. Returns the stored point.
    pub fn add_point(&mut self, x: f64, y: f64, z: f64) -> Result<Point3d> {
        let point = self.sphere().project(x, y, z)?;

        let arc = match self.points.last() {
            Some(previous) => Some(self.engine.compute(previous, &point)?),
            None => None,
        };

        self.points.push(point);
        if let Some(arc) = arc {
            self.arcs.push(arc);
        }

        debug!(
            "added point {} ({} points, {} arcs)",
            self.points.len() - 1,
            self.points.len(),
            self.arcs.len()
        );
        Ok(point)
    }

    /// Vector form of [`GeodesicSession::add_point`]
    pub fn add_vector(&mut self, v: &Vector3d) -> Result<Point3d> {
        self.add_point(v.x, v.y, v.z)
    }

    /// Append many raw vectors in order.
    ///
    /// All inputs are validated before anything is stored; one bad entry
    /// rejects the whole batch. Returns the number of points added.
    pub fn add_points<I>(&mut self, raw: I) -> Result<usize>
    where
        I: IntoIterator<Item = [f64; 3]>,
    {
        let sphere = self.sphere();
        let projected = raw
            .into_iter()
            .map(|[x, y, z]| sphere.project(x, y, z))
            .collect::<Result<Vec<_>>>()?;

        if projected.is_empty() {
            return Ok(0);
        }

        let mut chain = Vec::with_capacity(projected.len() + 1);
        chain.extend(self.points.last().copied());
        chain.extend(projected.iter().copied());
        let arcs = compute_path_arcs(&self.engine, &chain)?;

        let added = projected.len();
        self.points.extend(projected);
        self.arcs.extend(arcs);

        info!(
            "loaded {} points ({} points, {} arcs)",
            added,
            self.points.len(),
            self.arcs.len()
        );
        Ok(added)
    }

    /// Clear both stores together
    pub fn clear(&mut self) {
        self.points.clear();
        self.arcs.clear();
        info!("cleared all points");
    }

    /// Great-circle length of the whole path, in sphere units
    pub fn total_distance(&self) -> f64 {
        let sphere = self.sphere();
        self.points
            .as_slice()
            .windows(2)
            .map(|pair| sphere.great_circle_distance(&pair[0], &pair[1]))
            .sum()
    }
}

impl Default for GeodesicSession {
    fn default() -> Self {
        Self::with_engine(GeodesicEngine::default())
    }
}
