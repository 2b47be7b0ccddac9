//! Ordered stores for the session's points and arcs
//!
//! Both stores are append-only from the outside: only the owning
//! [`GeodesicSession`](crate::GeodesicSession) pushes to or clears them,
//! which keeps arc `i` aligned with the gap between points `i` and `i + 1`.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::arc::GeodesicArc;
use crate::point::Point3d;

/// Points in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointStore {
    points: Vec<Point3d>,
}

/// One arc per consecutive pair of points
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArcStore {
    arcs: Vec<GeodesicArc>,
}

impl PointStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Get the number of points in the store
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The most recently appended point
    pub fn last(&self) -> Option<&Point3d> {
        self.points.last()
    }

    /// Get an iterator over the points
    pub fn iter(&self) -> std::slice::Iter<'_, Point3d> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[Point3d] {
        &self.points
    }

    pub(crate) fn push(&mut self, point: Point3d) {
        self.points.push(point);
    }

    pub(crate) fn extend<I: IntoIterator<Item = Point3d>>(&mut self, points: I) {
        self.points.extend(points);
    }

    pub(crate) fn clear(&mut self) {
        self.points.clear();
    }
}

impl ArcStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self { arcs: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GeodesicArc> {
        self.arcs.iter()
    }

    pub fn as_slice(&self) -> &[GeodesicArc] {
        &self.arcs
    }

    /// Total number of interpolated points across all arcs
    pub fn vertex_count(&self) -> usize {
        self.arcs.iter().map(GeodesicArc::len).sum()
    }

    pub(crate) fn push(&mut self, arc: GeodesicArc) {
        self.arcs.push(arc);
    }

    pub(crate) fn extend<I: IntoIterator<Item = GeodesicArc>>(&mut self, arcs: I) {
        self.arcs.extend(arcs);
    }

    pub(crate) fn clear(&mut self) {
        self.arcs.clear();
    }
}

impl Index<usize> for PointStore {
    type Output = Point3d;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl Index<usize> for ArcStore {
    type Output = GeodesicArc;

    fn index(&self, index: usize) -> &Self::Output {
        &self.arcs[index]
    }
}

impl<'a> IntoIterator for &'a PointStore {
    type Item = &'a Point3d;
    type IntoIter = std::slice::Iter<'a, Point3d>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a ArcStore {
    type Item = &'a GeodesicArc;
    type IntoIter = std::slice::Iter<'a, GeodesicArc>;

    fn into_iter(self) -> Self::IntoIter {
        self.arcs.iter()
    }
}
