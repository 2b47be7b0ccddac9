//! Core data structures for geosphere
//!
//! This crate provides the numerical heart of the geodesic visualizer:
//! points projected onto a sphere, great-circle arcs between them, and the
//! session that keeps both in step.
//!
//! ```
//! use geosphere_core::GeodesicSession;
//!
//! let mut session = GeodesicSession::default();
//! session.add_point(0.0, 0.0, 1.0).unwrap();
//! session.add_point(0.0, 0.0, -1.0).unwrap();
//! assert_eq!(session.arcs()[0].len(), 100);
//! ```

pub mod arc;
pub mod batch;
pub mod config;
pub mod error;
pub mod geodesic;
pub mod point;
pub mod session;
pub mod sphere;
pub mod store;

pub use arc::*;
pub use batch::*;
pub use config::*;
pub use error::*;
pub use geodesic::*;
pub use point::*;
pub use session::*;
pub use sphere::*;
pub use store::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3};
