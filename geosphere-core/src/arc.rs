//! Discretized great-circle arcs

use serde::{Deserialize, Serialize};

use crate::point::Point3d;
use crate::sphere::Sphere;

/// Which interpolation branch produced an arc
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArcKind {
    /// Spherical linear interpolation between well separated points
    Slerp,
    /// Normalized linear interpolation for nearly coincident points
    Linear,
    /// Half great circle picked by the fixed axis convention for antipodes
    Antipodal,
}

/// An ordered sequence of surface points tracing a geodesic from start to end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeodesicArc {
    points: Vec<Point3d>,
    kind: ArcKind,
}

impl GeodesicArc {
    pub(crate) fn new(points: Vec<Point3d>, kind: ArcKind) -> Self {
        Self { points, kind }
    }

    /// First point of the arc
    pub fn start(&self) -> Option<&Point3d> {
        self.points.first()
    }

    /// Last point of the arc
    pub fn end(&self) -> Option<&Point3d> {
        self.points.last()
    }

    /// Number of interpolated points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point3d] {
        &self.points
    }

    pub fn kind(&self) -> ArcKind {
        self.kind
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point3d> {
        self.points.iter()
    }

    /// Total angle swept by the polyline, in radians
    pub fn angular_length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| Sphere::central_angle(&pair[0], &pair[1]))
            .sum()
    }

    /// Largest angle between two consecutive points, in radians
    pub fn max_step_angle(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| Sphere::central_angle(&pair[0], &pair[1]))
            .fold(0.0, f64::max)
    }
}

impl<'a> IntoIterator for &'a GeodesicArc {
    type Item = &'a Point3d;
    type IntoIter = std::slice::Iter<'a, Point3d>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl std::ops::Index<usize> for GeodesicArc {
    type Output = Point3d;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}
