//! The sphere that points and arcs are expressed against

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::point::{ensure_finite, Point3d, Vector3d};

/// A sphere centred on the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    radius: f64,
}

impl Sphere {
    /// Create a sphere, rejecting non-positive or non-finite radii
    pub fn new(radius: f64) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "sphere radius must be a positive finite number, got {}",
                radius
            )));
        }
        Ok(Self { radius })
    }

    /// The unit sphere
    pub const fn unit() -> Self {
        Self { radius: 1.0 }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Project a raw vector onto the sphere surface.
    ///
    /// The vector is scaled to unit length and then by the radius. The
    /// origin has no direction and fails with [`Error::DegenerateInput`];
    /// non-finite components fail with [`Error::Numeric`].
    pub fn project(&self, x: f64, y: f64, z: f64) -> Result<Point3d> {
        self.project_vector(&Vector3d::new(x, y, z))
    }

    /// Vector form of [`Sphere::project`]
    pub fn project_vector(&self, v: &Vector3d) -> Result<Point3d> {
        ensure_finite(v.x, v.y, v.z)?;
        // Divide by the largest component first so the norm can neither
        // overflow nor underflow for any finite nonzero input.
        let scale = v.amax();
        if scale == 0.0 {
            warn!("rejecting zero-length vector {:?}", v);
            return Err(Error::DegenerateInput);
        }
        let unit = (v / scale).normalize();
        Ok(Point3d::from(unit * self.radius))
    }

    /// Whether `point` lies on the surface within `tolerance`
    pub fn contains(&self, point: &Point3d, tolerance: f64) -> bool {
        (point.coords.norm() - self.radius).abs() <= tolerance
    }

    /// Angle subtended at the centre by two points, in radians
    pub fn central_angle(a: &Point3d, b: &Point3d) -> f64 {
        a.coords.angle(&b.coords)
    }

    /// Length of the minor great-circle arc between two surface points
    pub fn great_circle_distance(&self, a: &Point3d, b: &Point3d) -> f64 {
        Self::central_angle(a, b) * self.radius
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::unit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_rejects_bad_radius() {
        assert!(Sphere::new(0.0).is_err());
        assert!(Sphere::new(-1.0).is_err());
        assert!(Sphere::new(f64::NAN).is_err());
        assert!(Sphere::new(f64::INFINITY).is_err());
        assert_eq!(Sphere::new(2.5).unwrap().radius(), 2.5);
    }

    #[test]
    fn test_project_scales_to_radius() {
        let sphere = Sphere::new(3.0).unwrap();
        let vectors = [
            (1.0, 0.0, 0.0),
            (2.0, 0.0, 0.0),
            (1.0, 2.0, 3.0),
            (-1e-3, 4e-4, 7e-3),
            (1e6, -2e6, 3e5),
        ];
        for (x, y, z) in vectors {
            let p = sphere.project(x, y, z).unwrap();
            assert_relative_eq!(p.coords.norm(), 3.0, epsilon = 1e-6);
            assert!(sphere.contains(&p, 1e-6));
        }
    }

    #[test]
    fn test_project_keeps_direction() {
        let p = Sphere::unit().project(2.0, 0.0, 0.0).unwrap();
        assert_eq!(p, Point3d::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_project_origin_is_degenerate() {
        let err = Sphere::unit().project(0.0, 0.0, 0.0).unwrap_err();
        assert!(matches!(err, Error::DegenerateInput));
        assert_eq!(err.to_string(), "origin has no defined direction onto the sphere");
    }

    #[test]
    fn test_project_rejects_non_finite() {
        let err = Sphere::unit().project(f64::NAN, 1.0, 0.0).unwrap_err();
        assert!(matches!(err, Error::Numeric(_)));
    }

    #[test]
    fn test_great_circle_distance() {
        let sphere = Sphere::new(2.0).unwrap();
        let a = Point3d::new(2.0, 0.0, 0.0);
        let b = Point3d::new(0.0, 2.0, 0.0);
        let c = Point3d::new(-2.0, 0.0, 0.0);
        let pi = std::f64::consts::PI;
        assert_relative_eq!(sphere.great_circle_distance(&a, &b), pi, epsilon = 1e-12);
        assert_relative_eq!(sphere.great_circle_distance(&a, &c), 2.0 * pi, epsilon = 1e-12);
        assert_relative_eq!(sphere.great_circle_distance(&a, &a), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_project_huge_components() {
        let sphere = Sphere::new(2.0).unwrap();
        let p = sphere.project(1e200, 1e200, 1e200).unwrap();
        let expected = 2.0 / 3f64.sqrt();
        assert_relative_eq!(p.coords.norm(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(p.x, expected, epsilon = 1e-12);
        assert_relative_eq!(p.z, expected, epsilon = 1e-12);

        let p = sphere.project(f64::MAX, -f64::MAX, 0.0).unwrap();
        assert!(sphere.contains(&p, 1e-12));
    }

    #[test]
    fn test_project_tiny_components() {
        let p = Sphere::unit().project(1e-200, 0.0, 0.0).unwrap();
        assert_eq!(p, Point3d::new(1.0, 0.0, 0.0));

        let p = Sphere::unit().project(0.0, -5e-324, 0.0).unwrap();
        assert_eq!(p, Point3d::new(0.0, -1.0, 0.0));

        let p = Sphere::unit().project(3e-300, 0.0, 4e-300).unwrap();
        assert_relative_eq!(p.coords, Vector3d::new(0.6, 0.0, 0.8), epsilon = 1e-12);
    }

    #[test]
    fn test_project_vector_rejects_infinite() {
        let v = Vector3d::new(f64::INFINITY, 0.0, 0.0);
        assert!(matches!(Sphere::unit().project_vector(&v), Err(Error::Numeric(_))));
    }
}
