//! Point types and related functionality

use nalgebra::{Point3, Vector3};

use crate::error::{Error, Result};

/// A 3D point with double precision coordinates
///
/// Stored points live on the surface of a [`Sphere`](crate::Sphere); the
/// tolerances used by the geodesic code are far below `f32` resolution, so
/// everything here is `f64`.
pub type Point3d = Point3<f64>;

/// A 3D vector with double precision components
pub type Vector3d = Vector3<f64>;

/// Reject NaN and infinite components with a [`Error::Numeric`].
pub fn ensure_finite(x: f64, y: f64, z: f64) -> Result<()> {
    if x.is_finite() && y.is_finite() && z.is_finite() {
        Ok(())
    } else {
        Err(Error::Numeric(format!(
            "coordinates must be finite, got ({}, {}, {})",
            x, y, z
        )))
    }
}

/// Format a point the way status messages show it: three decimals per axis.
pub fn format_point(point: &Point3d) -> String {
    format!("({:.3}, {:.3}, {:.3})", point.x, point.y, point.z)
}
