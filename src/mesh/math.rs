//! Mesh math utilities

use crate::{Error, Mesh, Result};
use nalgebra::Vector3;

impl Mesh {
    /// Get the three corner positions of a triangle by index
    pub fn get_triangle_vertices(
        &self,
        index: usize,
    ) -> Result<(Vector3<f32>, Vector3<f32>, Vector3<f32>)> {
        let tri = self.get_triangle(index).ok_or_else(|| {
            Error::InvalidParameter(format!("Triangle index {} out of range", index))
        })?;

        let corner = |n: i32| {
            self.get_vertex(n as usize).ok_or_else(|| {
                Error::InvalidParameter(format!("Triangle references missing vertex {}", n))
            })
        };

        Ok((corner(tri.v0)?, corner(tri.v1)?, corner(tri.v2)?))
    }

    /// Check if a point lies inside the triangle
    pub fn point_lies_on_triangle(
        point: Vector3<f32>,
        a: Vector3<f32>,
        b: Vector3<f32>,
        c: Vector3<f32>,
    ) -> bool {
        let a = a - point;
        let b = b - point;
        let c = c - point;

        let u = b.cross(&c);
        let v = c.cross(&a);
        let w = a.cross(&b);

        if u.dot(&v) < 0.0 {
            return false;
        }
        if u.dot(&w) < 0.0 {
            return false;
        }
        true
    }

    /// Get the normal of a triangle by index (normalized)
    pub fn triangle_normal(&self, index: usize) -> Result<Vector3<f32>> {
        let (a, b, c) = self.get_triangle_vertices(index)?;
        let normal = (b - a).cross(&(c - a));
        let norm = normal.norm();
        if norm <= f32::EPSILON {
            Ok(Vector3::zeros())
        } else {
            Ok(normal / norm)
        }
    }

    /// Get the area of a triangle by index
    pub fn triangle_area(&self, index: usize) -> Result<f32> {
        let (a, b, c) = self.get_triangle_vertices(index)?;
        Ok(0.5 * (b - a).cross(&(c - a)).norm())
    }

    /// Compute total surface area of the mesh
    pub fn surface_area(&self) -> Result<f32> {
        let mut area = 0.0;
        for i in 0..self.triangle_count() {
            area += self.triangle_area(i)?;
        }
        Ok(area)
    }

    /// Signed volume of a closed, consistently oriented mesh.
    ///
    /// Uses the standard triangle-tetrahedron decomposition against the origin.
    /// If the mesh is not closed or triangle winding is inconsistent, results may be meaningless.
    pub fn signed_volume(&self) -> Result<f32> {
        let mut v6_sum = 0.0f32;
        for i in 0..self.triangle_count() {
            let (a, b, c) = self.get_triangle_vertices(i)?;
            v6_sum += a.dot(&b.cross(&c));
        }
        Ok(v6_sum / 6.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_area_and_normal() {
        let mut mesh = Mesh::new();
        mesh.add_triangle_vertices(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        );

        let area = mesh.triangle_area(0).expect("Failed to compute area");
        assert!((area - 0.5).abs() < 1e-6);

        let normal = mesh.triangle_normal(0).expect("Failed to compute normal");
        assert!((normal - Vector3::new(0.0, 0.0, 1.0)).norm() < 1e-6);
    }

    #[test]
    fn test_out_of_range_triangle() {
        let mesh = Mesh::new();
        assert!(mesh.get_triangle_vertices(0).is_err());
    }

    #[test]
    fn test_point_lies_on_triangle() {
        let a = Vector3::new(0.0, 0.0, 0.0);
        let b = Vector3::new(2.0, 0.0, 0.0);
        let c = Vector3::new(0.0, 2.0, 0.0);
        assert!(Mesh::point_lies_on_triangle(
            Vector3::new(0.5, 0.5, 0.0),
            a,
            b,
            c
        ));
        assert!(!Mesh::point_lies_on_triangle(
            Vector3::new(3.0, 3.0, 0.0),
            a,
            b,
            c
        ));
    }
}
