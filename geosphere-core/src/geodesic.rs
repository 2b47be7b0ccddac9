//! Great-circle interpolation between two points on a sphere
//!
//! Three branches produce the arc:
//! - slerp when the points are more than [`SLERP_MIN_ANGLE`] apart,
//! - normalized linear interpolation when they nearly coincide,
//! - a Rodrigues rotation about a fixed perpendicular axis when they are
//!   antipodal and the great circle is not unique.
//!
//! The tolerances below are load-bearing; changing them changes output.

use std::f64::consts::PI;

use log::debug;

use crate::arc::{ArcKind, GeodesicArc};
use crate::config::SphereConfig;
use crate::error::{Error, Result};
use crate::point::{Point3d, Vector3d};
use crate::sphere::Sphere;

/// Points per arc unless configured otherwise
pub const DEFAULT_RESOLUTION: usize = 100;

/// Below this separation (radians) slerp switches to linear interpolation
pub const SLERP_MIN_ANGLE: f64 = 0.001;

/// Tolerance on `dot + 1` for treating two directions as antipodal
pub const ANTIPODAL_EPSILON: f64 = 1e-10;

/// Tolerance on the x/y components for treating a direction as the z axis
pub const AXIS_EPSILON: f64 = 1e-10;

/// Interpolated vectors shorter than this use [`fallback_direction`]
pub const MIN_INTERPOLATED_NORM: f64 = 1e-10;

/// Direction substituted when an interpolated vector collapses to zero
pub fn fallback_direction() -> Vector3d {
    Vector3d::x()
}

/// Compute the minor great-circle arc from `p1` to `p2`.
///
/// Both inputs are re-normalized first, so only their directions matter.
/// The result has exactly `resolution` points, each at distance `radius`
/// from the origin. This is a pure function of its arguments.
pub fn compute_geodesic(
    p1: &Point3d,
    p2: &Point3d,
    radius: f64,
    resolution: usize,
) -> Result<GeodesicArc> {
    GeodesicEngine::new(Sphere::new(radius)?, resolution)?.compute(p1, p2)
}

/// Arc generator bound to one sphere and resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodesicEngine {
    sphere: Sphere,
    resolution: usize,
}

impl GeodesicEngine {
    pub fn new(sphere: Sphere, resolution: usize) -> Result<Self> {
        if resolution < 2 {
            return Err(Error::InvalidConfig(format!(
                "arc resolution must be at least 2, got {}",
                resolution
            )));
        }
        Ok(Self { sphere, resolution })
    }

    pub fn from_config(config: &SphereConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.sphere()?, config.resolution)
    }

    pub fn sphere(&self) -> Sphere {
        self.sphere
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Interpolate the arc between two points; see [`compute_geodesic`].
    pub fn compute(&self, p1: &Point3d, p2: &Point3d) -> Result<GeodesicArc> {
        let u1 = unit_direction(p1)?;
        let u2 = unit_direction(p2)?;

        let dot = u1.dot(&u2).clamp(-1.0, 1.0);
        let angle = dot.acos();

        let arc = if (dot + 1.0).abs() < ANTIPODAL_EPSILON {
            self.antipodal_arc(&u1)
        } else if angle > SLERP_MIN_ANGLE {
            self.interpolated_arc(&u1, &u2, angle, ArcKind::Slerp)
        } else {
            self.interpolated_arc(&u1, &u2, angle, ArcKind::Linear)
        };

        debug!(
            "computed {:?} arc of {} points spanning {:.6} rad",
            arc.kind(),
            arc.len(),
            angle
        );
        Ok(arc)
    }

    fn parameter(&self, i: usize) -> f64 {
        i as f64 / (self.resolution - 1) as f64
    }

    fn antipodal_arc(&self, u1: &Vector3d) -> GeodesicArc {
        let radius = self.sphere.radius();
        let axis = antipodal_axis(u1);
        let axis_cross = axis.cross(u1);
        let axis_dot = axis.dot(u1);

        let points = (0..self.resolution)
            .map(|i| {
                let theta = self.parameter(i) * PI;
                let (sin_theta, cos_theta) = theta.sin_cos();

                // Rodrigues' rotation of u1 about axis by theta
                let rotated =
                    u1 * cos_theta + axis_cross * sin_theta + axis * axis_dot * (1.0 - cos_theta);
                Point3d::from(rotated * radius)
            })
            .collect();

        GeodesicArc::new(points, ArcKind::Antipodal)
    }

    fn interpolated_arc(
        &self,
        u1: &Vector3d,
        u2: &Vector3d,
        angle: f64,
        kind: ArcKind,
    ) -> GeodesicArc {
        let radius = self.sphere.radius();
        let sin_angle = angle.sin();

        let points = (0..self.resolution)
            .map(|i| {
                let t = self.parameter(i);
                let blended = match kind {
                    ArcKind::Slerp => {
                        let s1 = ((1.0 - t) * angle).sin() / sin_angle;
                        let s2 = (t * angle).sin() / sin_angle;
                        u1 * s1 + u2 * s2
                    }
                    _ => u1 * (1.0 - t) + u2 * t,
                };

                Point3d::from(direction_or_fallback(&blended) * radius)
            })
            .collect();

        GeodesicArc::new(points, kind)
    }
}

impl Default for GeodesicEngine {
    fn default() -> Self {
        Self {
            sphere: Sphere::unit(),
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

/// Axis perpendicular to `u1` used to pick one half great circle between
/// antipodes: `u1 × z`, or `u1 × x` when `u1` lies on the z axis.
pub fn antipodal_axis(u1: &Vector3d) -> Vector3d {
    let axis = if u1.x.abs() > AXIS_EPSILON || u1.y.abs() > AXIS_EPSILON {
        u1.cross(&Vector3d::z())
    } else {
        u1.cross(&Vector3d::x())
    };
    axis.normalize()
}

/// Unit vector along `v`, or [`fallback_direction`] when `v` has collapsed
fn direction_or_fallback(v: &Vector3d) -> Vector3d {
    let norm = v.norm();
    if norm > MIN_INTERPOLATED_NORM {
        v / norm
    } else {
        fallback_direction()
    }
}

fn unit_direction(p: &Point3d) -> Result<Vector3d> {
    Ok(Sphere::unit().project_vector(&p.coords)?.coords)
}
