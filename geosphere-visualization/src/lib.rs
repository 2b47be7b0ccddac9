//! Visualization support for geosphere
//!
//! This crate holds the presentation side of the geodesic viewer without
//! tying it to a particular graphics backend:
//! - Orbit camera rotated by right-button drags
//! - Control panel input, presets and status messages
//! - Keyboard bindings for window events
//! - Per-frame sphere, wireframe, arc and marker geometry

pub mod camera;
pub mod panel;
pub mod presets;
pub mod scene;
pub mod viewer;

pub use camera::*;
pub use panel::*;
pub use presets::*;
pub use scene::*;
pub use viewer::*;
