//! Renderer-agnostic frame geometry
//!
//! A [`SceneFrame`] is everything an external renderer needs for one frame:
//! the sphere, its wireframe overlay, the arcs as line strips and the user
//! points as markers, with colours and camera matrices resolved. Vertex
//! types are `Pod` so they can be uploaded as-is.

use std::f32::consts::{PI, TAU};

use bytemuck::{Pod, Zeroable};
use geosphere_core::{FrameSnapshot, Point3d};
use nalgebra::Matrix4;

use crate::camera::OrbitCamera;

/// Position and colour of one vertex
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl ColorVertex {
    pub fn from_point(point: &Point3d, color: [f32; 3]) -> Self {
        Self {
            position: [point.x as f32, point.y as f32, point.z as f32],
            color,
        }
    }
}

/// A connected polyline
#[derive(Debug, Clone, PartialEq)]
pub struct LineStrip {
    pub vertices: Vec<ColorVertex>,
    pub width: f32,
}

impl LineStrip {
    /// Raw vertex bytes for a vertex buffer
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

/// Colours and sizes used when building a frame
#[derive(Debug, Clone, PartialEq)]
pub struct SceneStyle {
    pub clear_color: [f32; 4],
    pub sphere_color: [f32; 3],
    pub sphere_segments: u32,
    pub wireframe_color: [f32; 3],
    /// Slices and stacks of the wireframe overlay
    pub wireframe_segments: u32,
    /// Lifts the wireframe off the surface to avoid z-fighting
    pub wireframe_offset: f32,
    pub wireframe_width: f32,
    pub arc_color: [f32; 3],
    pub arc_width: f32,
    pub point_color: [f32; 3],
    pub point_size: f32,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            clear_color: [0.1, 0.1, 0.15, 1.0],
            sphere_color: [0.3, 0.5, 0.8],
            sphere_segments: 50,
            wireframe_color: [0.2, 0.3, 0.4],
            wireframe_segments: 20,
            wireframe_offset: 0.001,
            wireframe_width: 1.0,
            arc_color: [1.0, 0.8, 0.0],
            arc_width: 3.0,
            point_color: [1.0, 0.2, 0.2],
            point_size: 10.0,
        }
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone)]
pub struct SceneFrame {
    pub clear_color: [f32; 4],
    pub sphere_radius: f32,
    pub sphere_color: [f32; 3],
    pub sphere_segments: u32,
    pub wireframe: Vec<LineStrip>,
    pub arcs: Vec<LineStrip>,
    pub points: Vec<ColorVertex>,
    pub point_size: f32,
    pub view: Matrix4<f32>,
    pub projection: Matrix4<f32>,
}

impl SceneFrame {
    /// Build a frame from a snapshot of the session
    pub fn build(snapshot: &FrameSnapshot<'_>, camera: &OrbitCamera, style: &SceneStyle) -> Self {
        let radius = snapshot.sphere.radius() as f32;

        let arcs = snapshot
            .arcs
            .iter()
            .map(|arc| LineStrip {
                vertices: arc
                    .iter()
                    .map(|p| ColorVertex::from_point(p, style.arc_color))
                    .collect(),
                width: style.arc_width,
            })
            .collect();

        let points = snapshot
            .points
            .iter()
            .map(|p| ColorVertex::from_point(p, style.point_color))
            .collect();

        Self {
            clear_color: style.clear_color,
            sphere_radius: radius,
            sphere_color: style.sphere_color,
            sphere_segments: style.sphere_segments,
            wireframe: wireframe(radius + style.wireframe_offset, style),
            arcs,
            points,
            point_size: style.point_size,
            view: camera.view_matrix(),
            projection: camera.projection_matrix(),
        }
    }

    /// Number of vertices across every line strip and marker
    pub fn vertex_count(&self) -> usize {
        self.wireframe.iter().chain(&self.arcs).map(|s| s.vertices.len()).sum::<usize>()
            + self.points.len()
    }

    /// Marker vertex bytes for a vertex buffer
    pub fn point_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.points)
    }

    pub fn view_projection(&self) -> Matrix4<f32> {
        self.projection * self.view
    }
}

/// Latitude rings between the poles plus meridians from pole to pole
fn wireframe(radius: f32, style: &SceneStyle) -> Vec<LineStrip> {
    let n = style.wireframe_segments.max(3);
    let vertex = |polar: f32, azimuth: f32| ColorVertex {
        position: [
            radius * polar.sin() * azimuth.cos(),
            radius * polar.sin() * azimuth.sin(),
            radius * polar.cos(),
        ],
        color: style.wireframe_color,
    };

    let rings = (1..n).map(|stack| {
        let polar = PI * stack as f32 / n as f32;
        (0..=n)
            .map(|slice| vertex(polar, TAU * slice as f32 / n as f32))
            .collect::<Vec<_>>()
    });

    let meridians = (0..n).map(|slice| {
        let azimuth = TAU * slice as f32 / n as f32;
        (0..=n)
            .map(|stack| vertex(PI * stack as f32 / n as f32, azimuth))
            .collect::<Vec<_>>()
    });

    rings
        .chain(meridians)
        .map(|vertices| LineStrip {
            vertices,
            width: style.wireframe_width,
        })
        .collect()
}
