//! Triangle mesh representation

use crate::{BBox3, Triangle, Vector3f};
use nalgebra::Vector3;

mod math; // Mesh math helpers

/// Triangle mesh
///
/// Represents geometry as an indexed collection of triangles. Vertex
/// positions are stored as compact [`Vector3f`] triples; an optional
/// per-vertex normal channel runs parallel to the vertex array.
pub struct Mesh {
    vertices: Vec<Vector3f>,
    normals: Vec<Vector3f>,
    triangles: Vec<Triangle>,
}

impl Mesh {
    /// Create an empty mesh
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            normals: Vec::new(),
            triangles: Vec::new(),
        }
    }

    /// Create a cube mesh from a bounding box
    pub fn from_bbox(bbox: &BBox3) -> Self {
        let mut mesh = Mesh::new();

        let size = bbox.size();
        let center = bbox.center();
        let half = size * 0.5;

        let vertices = [
            Vector3::new(-half.x, -half.y, -half.z) + center,
            Vector3::new(-half.x, -half.y, half.z) + center,
            Vector3::new(-half.x, half.y, -half.z) + center,
            Vector3::new(-half.x, half.y, half.z) + center,
            Vector3::new(half.x, -half.y, -half.z) + center,
            Vector3::new(half.x, -half.y, half.z) + center,
            Vector3::new(half.x, half.y, -half.z) + center,
            Vector3::new(half.x, half.y, half.z) + center,
        ];

        let indices: Vec<i32> = vertices.iter().map(|v| mesh.add_vertex(*v)).collect();

        let add_tri = |mesh: &mut Mesh, a: usize, b: usize, c: usize| {
            mesh.add_triangle(Triangle::new(indices[a], indices[b], indices[c]));
        };

        // Front face
        add_tri(&mut mesh, 0, 1, 3);
        add_tri(&mut mesh, 0, 3, 2);

        // Back face
        add_tri(&mut mesh, 4, 6, 7);
        add_tri(&mut mesh, 4, 7, 5);

        // Left face
        add_tri(&mut mesh, 0, 2, 6);
        add_tri(&mut mesh, 0, 6, 4);

        // Right face
        add_tri(&mut mesh, 1, 5, 7);
        add_tri(&mut mesh, 1, 7, 3);

        // Top face
        add_tri(&mut mesh, 2, 3, 7);
        add_tri(&mut mesh, 2, 7, 6);

        // Bottom face
        add_tri(&mut mesh, 0, 4, 5);
        add_tri(&mut mesh, 0, 5, 1);

        mesh
    }

    /// Add a vertex
    ///
    /// Returns the vertex index.
    ///
    /// # Example
    ///
    /// ```rust
    /// use meshprim::Mesh;
    /// use nalgebra::Vector3;
    ///
    /// let mut mesh = Mesh::new();
    /// let v0 = mesh.add_vertex(Vector3::new(0.0, 0.0, 0.0));
    /// let v1 = mesh.add_vertex(Vector3::new(1.0, 0.0, 0.0));
    /// assert_eq!((v0, v1), (0, 1));
    /// ```
    pub fn add_vertex(&mut self, pos: Vector3<f32>) -> i32 {
        let index = self.vertices.len() as i32;
        self.vertices.push(Vector3f::from(pos));
        index
    }

    /// Add a vertex together with its normal
    ///
    /// The normal channel must stay parallel to the vertex array: meshes
    /// either carry a normal for every vertex or for none.
    pub fn add_vertex_with_normal(&mut self, pos: Vector3<f32>, normal: Vector3<f32>) -> i32 {
        debug_assert_eq!(self.normals.len(), self.vertices.len());
        let index = self.add_vertex(pos);
        self.normals.push(Vector3f::from(normal));
        index
    }

    /// Add a triangle
    ///
    /// Returns the triangle index.
    pub fn add_triangle(&mut self, tri: Triangle) -> i32 {
        let index = self.triangles.len() as i32;
        self.triangles.push(tri);
        index
    }

    /// Add a triangle by vertex indices
    pub fn add_triangle_indices(&mut self, a: i32, b: i32, c: i32) -> i32 {
        self.add_triangle(Triangle::new(a, b, c))
    }

    /// Add a triangle by vertex positions
    pub fn add_triangle_vertices(
        &mut self,
        a: Vector3<f32>,
        b: Vector3<f32>,
        c: Vector3<f32>,
    ) -> i32 {
        let v0 = self.add_vertex(a);
        let v1 = self.add_vertex(b);
        let v2 = self.add_vertex(c);
        self.add_triangle(Triangle::new(v0, v1, v2))
    }

    /// Add a quad by vertex indices
    pub fn add_quad(&mut self, n0: i32, n1: i32, n2: i32, n3: i32, flipped: bool) {
        if flipped {
            self.add_triangle_indices(n0, n2, n1);
            self.add_triangle_indices(n0, n3, n2);
        } else {
            self.add_triangle_indices(n0, n1, n2);
            self.add_triangle_indices(n0, n2, n3);
        }
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Whether every vertex carries a normal
    pub fn has_normals(&self) -> bool {
        !self.normals.is_empty() && self.normals.len() == self.vertices.len()
    }

    /// Get a vertex by index
    pub fn get_vertex(&self, index: usize) -> Option<Vector3<f32>> {
        self.vertices.get(index).map(|v| Vector3::from(*v))
    }

    /// Get a vertex normal by index
    pub fn get_normal(&self, index: usize) -> Option<Vector3<f32>> {
        self.normals.get(index).map(|n| Vector3::from(*n))
    }

    /// Get a triangle by index
    pub fn get_triangle(&self, index: usize) -> Option<Triangle> {
        self.triangles.get(index).copied()
    }

    /// Vertex position storage
    pub fn positions(&self) -> &[Vector3f] {
        &self.vertices
    }

    /// Vertex normal storage (empty when the mesh carries no normals)
    pub fn normals(&self) -> &[Vector3f] {
        &self.normals
    }

    /// Triangle index storage
    pub fn indices(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Axis-aligned bounding box of all vertices
    pub fn bounding_box(&self) -> BBox3 {
        let mut bbox = BBox3::empty();
        for v in &self.vertices {
            bbox.include_point(Vector3::from(*v));
        }
        bbox
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_mesh() {
        let mesh = Mesh::new();
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        assert!(!mesh.has_normals());
        assert!(mesh.bounding_box().is_empty());
    }

    #[test]
    fn test_from_bbox_counts() {
        let bbox = BBox3::new(Vector3::zeros(), Vector3::new(1.0, 1.0, 1.0));
        let mesh = Mesh::from_bbox(&bbox);
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn test_normal_channel_parallel() {
        let mut mesh = Mesh::new();
        mesh.add_vertex_with_normal(Vector3::new(0.0, 0.0, 1.0), Vector3::new(0.0, 0.0, 1.0));
        mesh.add_vertex_with_normal(Vector3::new(1.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
        assert!(mesh.has_normals());
        assert_eq!(mesh.get_normal(1), Some(Vector3::new(1.0, 0.0, 0.0)));
        assert_eq!(mesh.get_normal(2), None);
    }
}
