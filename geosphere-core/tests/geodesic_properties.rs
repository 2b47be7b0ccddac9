//! Integration tests for geosphere-core
//!
//! These exercise the session and the geodesic engine together the way an
//! input adapter and renderer would.

use approx::assert_relative_eq;
use geosphere_core::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn assert_point_eq(a: &Point3d, b: &Point3d) {
    assert_relative_eq!(a.x, b.x, epsilon = 1e-6);
    assert_relative_eq!(a.y, b.y, epsilon = 1e-6);
    assert_relative_eq!(a.z, b.z, epsilon = 1e-6);
}

/// Random non-zero vectors with a fixed seed
fn random_vectors(count: usize, seed: u64) -> Vec<Vector3d> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = Vec::with_capacity(count);
    while out.len() < count {
        let v = Vector3d::new(
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
        );
        if v.norm() > 1e-3 {
            out.push(v);
        }
    }
    out
}

#[test]
fn test_normalized_points_lie_on_sphere() {
    for radius in [0.5, 1.0, 6371.0] {
        let sphere = Sphere::new(radius).unwrap();
        for v in random_vectors(200, 7) {
            let p = sphere.project_vector(&v).unwrap();
            assert_relative_eq!(p.coords.norm(), radius, epsilon = 1e-6, max_relative = 1e-12);
        }
    }
}

#[test]
fn test_zero_vector_is_rejected_without_mutation() {
    let mut session = GeodesicSession::default();
    let err = session.add_point(0.0, 0.0, 0.0).unwrap_err();
    assert!(matches!(err, Error::DegenerateInput));
    assert!(session.points().is_empty());
    assert!(session.arcs().is_empty());
}

#[test]
fn test_random_pairs_produce_valid_arcs() {
    let engine = GeodesicEngine::default();
    let sphere = engine.sphere();
    let vectors = random_vectors(400, 42);

    for pair in vectors.chunks(2) {
        let p1 = sphere.project_vector(&pair[0]).unwrap();
        let p2 = sphere.project_vector(&pair[1]).unwrap();
        let arc = engine.compute(&p1, &p2).unwrap();

        assert_eq!(arc.len(), DEFAULT_RESOLUTION);
        assert_point_eq(&arc[0], &p1);
        assert_point_eq(&arc[DEFAULT_RESOLUTION - 1], &p2);
        for p in &arc {
            assert_relative_eq!(p.coords.norm(), 1.0, epsilon = 1e-6);
        }
        // no large jumps between neighbours
        let expected_step = Sphere::central_angle(&p1, &p2) / (DEFAULT_RESOLUTION - 1) as f64;
        assert!(arc.max_step_angle() <= expected_step + 1e-9);
    }
}

#[test]
fn test_random_antipodes() {
    let engine = GeodesicEngine::new(Sphere::new(2.0).unwrap(), 33).unwrap();
    let sphere = engine.sphere();
    for v in random_vectors(50, 3) {
        let p1 = sphere.project_vector(&v).unwrap();
        let p2 = sphere.project_vector(&-v).unwrap();
        let arc = engine.compute(&p1, &p2).unwrap();

        assert_eq!(arc.kind(), ArcKind::Antipodal);
        assert_eq!(arc.len(), 33);
        assert_point_eq(&arc[0], &p1);
        assert_point_eq(&arc[32], &p2);
        for p in &arc {
            assert_relative_eq!(p.coords.norm(), 2.0, epsilon = 1e-6);
        }
        assert_relative_eq!(arc.angular_length(), std::f64::consts::PI, epsilon = 1e-6);
    }
}

#[test]
fn test_compute_is_idempotent() {
    let p1 = Point3d::new(0.2, 0.9, -0.1);
    let p2 = Point3d::new(-0.7, 0.1, 0.6);
    let first = compute_geodesic(&p1, &p2, 1.0, 100).unwrap();
    let second = compute_geodesic(&p1, &p2, 1.0, 100).unwrap();
    assert_eq!(first.points(), second.points());
}

#[test]
fn test_scenario_pole_to_pole() {
    let mut session = GeodesicSession::default();

    session.add_point(0.0, 0.0, 1.0).unwrap();
    assert_eq!(session.points().as_slice(), &[Point3d::new(0.0, 0.0, 1.0)]);
    assert!(session.arcs().is_empty());

    session.add_point(0.0, 0.0, -1.0).unwrap();
    assert_eq!(session.points().len(), 2);
    assert_eq!(session.arcs().len(), 1);

    let arc = &session.arcs()[0];
    assert_eq!(arc.len(), 100);
    assert_point_eq(arc.start().unwrap(), &Point3d::new(0.0, 0.0, 1.0));
    assert_point_eq(arc.end().unwrap(), &Point3d::new(0.0, 0.0, -1.0));
}

#[test]
fn test_scenario_same_direction() {
    let mut session = GeodesicSession::default();
    session.add_point(1.0, 0.0, 0.0).unwrap();
    let second = session.add_point(2.0, 0.0, 0.0).unwrap();
    assert_eq!(second, Point3d::new(1.0, 0.0, 0.0));

    let arc = &session.arcs()[0];
    assert_eq!(arc.kind(), ArcKind::Linear);
    assert_eq!(arc.len(), 100);
    assert!(arc.iter().all(|p| p.coords.iter().all(|c| c.is_finite())));
}

#[test]
fn test_clear_empty_session() {
    let mut session = GeodesicSession::default();
    session.clear();
    assert!(session.points().is_empty());
    assert!(session.arcs().is_empty());
}

#[test]
fn test_clear_resets_both_stores() {
    let mut session = GeodesicSession::default();
    session.add_points([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]).unwrap();
    assert_eq!(session.arcs().len(), 2);

    session.clear();
    let frame = session.snapshot();
    assert!(frame.points.is_empty());
    assert!(frame.arcs.is_empty());

    // arcs start again from the first point after a clear
    session.add_point(0.0, 1.0, 0.0).unwrap();
    assert!(session.arcs().is_empty());
}

#[test]
fn test_arcs_align_with_point_gaps() {
    let mut session = GeodesicSession::new(SphereConfig::default().with_resolution(16)).unwrap();
    let vectors = random_vectors(20, 11);
    for v in &vectors {
        session.add_vector(v).unwrap();
    }

    assert_eq!(session.arcs().len(), session.points().len() - 1);
    for (i, arc) in session.arcs().iter().enumerate() {
        assert_point_eq(arc.start().unwrap(), &session.points()[i]);
        assert_point_eq(arc.end().unwrap(), &session.points()[i + 1]);
    }
}
