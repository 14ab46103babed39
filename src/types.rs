//! Basic types for meshprim

use nalgebra::Vector3;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Compact vertex component storage.
///
/// The mesh stores plain `f32` triples; the public API speaks
/// `nalgebra::Vector3<f32>`. The `From` conversions below are the boundary
/// between the two.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector3f {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<Vector3<f32>> for Vector3f {
    fn from(v: Vector3<f32>) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<Vector3f> for Vector3<f32> {
    fn from(v: Vector3f) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

/// Triangle defined by three vertex indices
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triangle {
    /// First vertex index
    pub v0: i32,
    /// Second vertex index
    pub v1: i32,
    /// Third vertex index
    pub v2: i32,
}

impl Triangle {
    /// Create a new triangle
    pub fn new(v0: i32, v1: i32, v2: i32) -> Self {
        Self { v0, v1, v2 }
    }

    /// Get vertex indices as an array
    pub fn indices(&self) -> [i32; 3] {
        [self.v0, self.v1, self.v2]
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Triangle({}, {}, {})", self.v0, self.v1, self.v2)
    }
}

/// 3D Bounding Box
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BBox3 {
    min: Vector3f,
    max: Vector3f,
}

impl BBox3 {
    /// Create a new bounding box
    pub fn new(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        debug_assert!(min.x <= max.x);
        debug_assert!(min.y <= max.y);
        debug_assert!(min.z <= max.z);
        Self {
            min: Vector3f::from(min),
            max: Vector3f::from(max),
        }
    }

    /// Create an empty bounding box
    pub fn empty() -> Self {
        Self {
            min: Vector3f {
                x: f32::MAX,
                y: f32::MAX,
                z: f32::MAX,
            },
            max: Vector3f {
                x: f32::MIN,
                y: f32::MIN,
                z: f32::MIN,
            },
        }
    }

    /// Create a bounding box from center and size
    pub fn from_center_size(center: Vector3<f32>, size: Vector3<f32>) -> Self {
        let half_size = size * 0.5;
        Self::new(center - half_size, center + half_size)
    }

    /// Get minimum corner
    pub fn min(&self) -> Vector3<f32> {
        Vector3::from(self.min)
    }

    /// Get maximum corner
    pub fn max(&self) -> Vector3<f32> {
        Vector3::from(self.max)
    }

    /// Get the size of the bounding box
    pub fn size(&self) -> Vector3<f32> {
        self.max() - self.min()
    }

    /// Get the center of the bounding box
    pub fn center(&self) -> Vector3<f32> {
        (self.min() + self.max()) * 0.5
    }

    /// Get the volume of the bounding box
    pub fn volume(&self) -> f32 {
        let size = self.size();
        size.x * size.y * size.z
    }

    /// Check if the bounding box is empty
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Check if a point is inside the bounding box
    pub fn contains(&self, point: Vector3<f32>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Expand the bounding box to include a point
    pub fn include_point(&mut self, point: Vector3<f32>) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    /// Expand the bounding box to include another bounding box
    pub fn include_bbox(&mut self, other: &BBox3) {
        if other.is_empty() {
            return;
        }
        self.include_point(other.min());
        self.include_point(other.max());
    }
}

impl fmt::Display for BBox3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Min: <{:.2}, {:.2}, {:.2}> | Max: <{:.2}, {:.2}, {:.2}>>",
            self.min.x, self.min.y, self.min.z, self.max.x, self.max.y, self.max.z
        )
    }
}
