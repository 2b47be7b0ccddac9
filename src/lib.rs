//! # geosphere
//!
//! Great-circle geodesics between points placed on a sphere.
//!
//! This is the umbrella crate that provides convenient access to all geosphere
//! functionality. You can use this crate to get everything in one place, or use
//! individual crates for more granular control over dependencies.
//!
//! ## Features
//!
//! - **Core**: points, spheres, arcs, the geodesic engine and the session
//! - **I/O**: coordinate parsing, point lists, CSV/OBJ/JSON export
//! - **Visualization**: camera, control panel and frame geometry for a viewer
//!
//! ## Quick Start
//!
//! ```rust
//! use geosphere::prelude::*;
//!
//! let mut session = GeodesicSession::default();
//! session.add_point(0.0, 0.0, 1.0).unwrap();
//! session.add_point(1.0, 0.0, 0.0).unwrap();
//!
//! let arc = &session.arcs()[0];
//! assert_eq!(arc.len(), 100);
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: Enables core and io
//! - `io`: Text parsing and file formats
//! - `visualization`: Viewer state and frame geometry
//! - `all`: Enables all features

// Re-export core functionality
pub use geosphere_core::*;

// Re-export sub-crates
#[cfg(feature = "io")]
pub use geosphere_io as io;

#[cfg(feature = "visualization")]
pub use geosphere_visualization as visualization;

/// Convenient imports for common use cases
pub mod prelude {
    pub use geosphere_core::*;

    #[cfg(feature = "io")]
    pub use geosphere_io::*;

    #[cfg(feature = "visualization")]
    pub use geosphere_visualization::*;
}
