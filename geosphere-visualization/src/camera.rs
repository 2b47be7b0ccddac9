//! Orbit camera driven by right-button drags

use nalgebra::{Matrix4, Perspective3, Point3, Rotation3, Vector3};
use winit::dpi::PhysicalPosition;

/// Degrees of rotation per pixel of drag
pub const DRAG_DEGREES_PER_PIXEL: f64 = 0.5;

/// A camera looking at the sphere from a fixed distance, rotated by dragging
///
/// Rotations are in degrees: `rotation_x` tilts about the screen x axis,
/// `rotation_y` spins about the sphere's y axis.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub distance: f32,
    pub fov: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
    last_drag_pos: Option<PhysicalPosition<f64>>,
}

impl OrbitCamera {
    /// Create a new camera
    pub fn new(distance: f32, fov: f32, near: f32, far: f32) -> Self {
        Self {
            rotation_x: 0.0,
            rotation_y: 0.0,
            distance,
            fov,
            aspect_ratio: 1.0,
            near,
            far,
            last_drag_pos: None,
        }
    }

    /// Get the view matrix: pull back by `distance`, then tilt, then spin
    pub fn view_matrix(&self) -> Matrix4<f32> {
        let translation = Matrix4::new_translation(&Vector3::new(0.0, 0.0, -self.distance));
        let tilt = Rotation3::from_axis_angle(&Vector3::x_axis(), self.rotation_x.to_radians());
        let spin = Rotation3::from_axis_angle(&Vector3::y_axis(), self.rotation_y.to_radians());
        translation * tilt.to_homogeneous() * spin.to_homogeneous()
    }

    /// Get the projection matrix
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        let perspective = Perspective3::new(self.aspect_ratio, self.fov, self.near, self.far);
        perspective.into_inner()
    }

    /// Where a world point ends up in eye space
    pub fn to_eye(&self, point: &Point3<f32>) -> Point3<f32> {
        Point3::from_homogeneous(self.view_matrix() * point.to_homogeneous()).unwrap_or(*point)
    }

    /// Track a viewport resize; a zero height keeps an aspect of 1
    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect_ratio = if height == 0 {
            1.0
        } else {
            width as f32 / height as f32
        };
    }

    /// Start a drag at `position`
    pub fn begin_drag(&mut self, position: PhysicalPosition<f64>) {
        self.last_drag_pos = Some(position);
    }

    /// Rotate by the cursor movement since the last drag position.
    ///
    /// Returns false when no drag is in progress.
    pub fn drag_to(&mut self, position: PhysicalPosition<f64>) -> bool {
        let Some(last) = self.last_drag_pos else {
            return false;
        };
        let dx = position.x - last.x;
        let dy = position.y - last.y;
        self.rotation_y += (dx * DRAG_DEGREES_PER_PIXEL) as f32;
        self.rotation_x += (dy * DRAG_DEGREES_PER_PIXEL) as f32;
        self.last_drag_pos = Some(position);
        true
    }

    pub fn end_drag(&mut self) {
        self.last_drag_pos = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.last_drag_pos.is_some()
    }

    /// Reset rotation, keeping lens settings
    pub fn reset(&mut self) {
        self.rotation_x = 0.0;
        self.rotation_y = 0.0;
        self.last_drag_pos = None;
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(4.0, std::f32::consts::FRAC_PI_4, 0.1, 50.0)
    }
}
