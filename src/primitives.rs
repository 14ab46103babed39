//! Mesh primitives generation

use crate::{BBox3, Error, Mesh, Result, Triangle};
use nalgebra::Vector3;
use std::collections::HashMap;
use std::f32::consts::TAU;

/// Largest supported icosphere subdivision level.
///
/// `10 * 4^n + 2` vertices must stay addressable through the `i32` index
/// type of [`Triangle`].
pub const MAX_ICOSPHERE_SUBDIVISIONS: u32 = 12;

/// Solid sphere primitive built from a subdivided icosahedron.
///
/// Unit radius, centered at the origin. Each subdivision step splits every
/// triangle into four, sharing the new edge-midpoint vertices between
/// neighboring triangles, and projects them onto the sphere. The result is
/// a closed mesh with `10 * 4^n + 2` vertices and `20 * 4^n` triangles in
/// outward counter-clockwise winding, carrying per-vertex normals (equal to
/// the unit positions).
///
/// # Example
///
/// ```rust
/// use meshprim::primitives;
///
/// let sphere = primitives::icosphere_solid(2)?;
/// assert_eq!(sphere.vertex_count(), 162);
/// assert_eq!(sphere.triangle_count(), 320);
/// # Ok::<(), meshprim::Error>(())
/// ```
pub fn icosphere_solid(subdivisions: u32) -> Result<Mesh> {
    if subdivisions > MAX_ICOSPHERE_SUBDIVISIONS {
        return Err(Error::InvalidParameter(format!(
            "Icosphere subdivisions must be at most {}, got {}",
            MAX_ICOSPHERE_SUBDIVISIONS, subdivisions
        )));
    }

    let mut positions: Vec<Vector3<f32>> = icosahedron_vertices().to_vec();
    let mut faces: Vec<Triangle> = ICOSAHEDRON_INDICES
        .chunks_exact(3)
        .map(|c| Triangle::new(c[0], c[1], c[2]))
        .collect();

    for _ in 0..subdivisions {
        let mut midpoints: HashMap<(i32, i32), i32> = HashMap::new();
        let mut subdivided = Vec::with_capacity(faces.len() * 4);

        for tri in &faces {
            let ab = edge_midpoint(&mut positions, &mut midpoints, tri.v0, tri.v1);
            let bc = edge_midpoint(&mut positions, &mut midpoints, tri.v1, tri.v2);
            let ca = edge_midpoint(&mut positions, &mut midpoints, tri.v2, tri.v0);

            subdivided.push(Triangle::new(tri.v0, ab, ca));
            subdivided.push(Triangle::new(ab, tri.v1, bc));
            subdivided.push(Triangle::new(ab, bc, ca));
            subdivided.push(Triangle::new(ca, bc, tri.v2));
        }

        faces = subdivided;
    }

    let mut mesh = Mesh::new();
    for p in &positions {
        // Unit sphere: the outward normal is the position itself
        mesh.add_vertex_with_normal(*p, *p);
    }
    for tri in faces {
        mesh.add_triangle(tri);
    }

    Ok(mesh)
}

/// Axis-aligned cuboid, 8 vertices and 12 triangles
pub fn cube(scale: Option<Vector3<f32>>, offset: Option<Vector3<f32>>) -> Mesh {
    let vec_s = scale.unwrap_or_else(|| Vector3::new(1.0, 1.0, 1.0));
    let offset = offset.unwrap_or_else(Vector3::zeros);
    let bbox = BBox3::from_center_size(offset, vec_s);
    Mesh::from_bbox(&bbox)
}

/// Capped elliptic cylinder with `4 * sides` triangles
pub fn cylinder(
    scale: Option<Vector3<f32>>,
    offset: Option<Vector3<f32>>,
    sides: usize,
) -> Result<Mesh> {
    if sides < 3 {
        return Err(Error::InvalidParameter(format!(
            "Cylinder needs at least 3 sides, got {}",
            sides
        )));
    }

    let vec_s = scale.unwrap_or_else(|| Vector3::new(1.0, 1.0, 1.0));
    let offset = offset.unwrap_or_else(Vector3::zeros);

    let f_a = vec_s.x * 0.5;
    let f_b = vec_s.y * 0.5;

    let mut mesh = Mesh::new();
    let mut bottom_center = offset;
    bottom_center.z -= vec_s.z * 0.5;
    let mut top_center = bottom_center;
    top_center.z += vec_s.z;

    let mut prev_bottom = Vector3::new(f_a, 0.0, 0.0) + bottom_center;
    let mut prev_top = prev_bottom;
    prev_top.z += vec_s.z;

    let step = std::f32::consts::PI * 2.0 / sides as f32;

    for i in 1..=sides {
        let angle = i as f32 * step;
        let this_bottom = Vector3::new(angle.cos() * f_a, angle.sin() * f_b, 0.0) + bottom_center;
        let mut this_top = this_bottom;
        this_top.z += vec_s.z;

        add_triangle(&mut mesh, top_center, prev_top, this_top);
        add_triangle(&mut mesh, prev_bottom, this_bottom, prev_top);
        add_triangle(&mut mesh, this_bottom, this_top, prev_top);
        add_triangle(&mut mesh, bottom_center, this_bottom, prev_bottom);

        prev_bottom = this_bottom;
        prev_top = this_top;
    }

    Ok(mesh)
}

/// Capped elliptic cone with `2 * sides` triangles
pub fn cone(
    scale: Option<Vector3<f32>>,
    offset: Option<Vector3<f32>>,
    sides: usize,
) -> Result<Mesh> {
    if sides < 3 {
        return Err(Error::InvalidParameter(format!(
            "Cone needs at least 3 sides, got {}",
            sides
        )));
    }

    let vec_s = scale.unwrap_or_else(|| Vector3::new(1.0, 1.0, 1.0));
    let offset = offset.unwrap_or_else(Vector3::zeros);

    let f_a = vec_s.x * 0.5;
    let f_b = vec_s.y * 0.5;

    let mut mesh = Mesh::new();
    let mut bottom_center = offset;
    bottom_center.z -= vec_s.z * 0.5;
    let mut top = bottom_center;
    top.z += vec_s.z;
    let mut prev_bottom = Vector3::new(f_a, 0.0, 0.0) + bottom_center;

    let step = std::f32::consts::PI * 2.0 / sides as f32;

    for i in 1..=sides {
        let angle = i as f32 * step;
        let this_bottom = Vector3::new(angle.cos() * f_a, angle.sin() * f_b, 0.0) + bottom_center;

        add_triangle(&mut mesh, prev_bottom, this_bottom, top);
        add_triangle(&mut mesh, bottom_center, this_bottom, prev_bottom);

        prev_bottom = this_bottom;
    }

    Ok(mesh)
}

/// Regular icosahedron on the unit sphere: poles on the Z axis, two
/// five-vertex rings at latitude `atan(1/2)`.
fn icosahedron_vertices() -> [Vector3<f32>; 12] {
    let mut vertices = [Vector3::zeros(); 12];

    vertices[0] = Vector3::z();
    vertices[11] = -Vector3::z();

    let phi = (0.5_f32).atan();
    for i in 0..5 {
        let theta = i as f32 / 5.0 * TAU;
        vertices[i + 1] = Vector3::new(theta.cos() * phi.cos(), theta.sin() * phi.cos(), phi.sin());
    }
    for i in 0..5 {
        let theta = (i as f32 + 0.5) / 5.0 * TAU;
        vertices[i + 6] =
            Vector3::new(theta.cos() * phi.cos(), theta.sin() * phi.cos(), -phi.sin());
    }

    vertices
}

#[rustfmt::skip]
const ICOSAHEDRON_INDICES: [i32; 60] = [
    0, 1, 2,
    0, 2, 3,
    0, 3, 4,
    0, 4, 5,
    0, 5, 1,

    1, 6, 2,
    2, 7, 3,
    3, 8, 4,
    4, 9, 5,
    5, 10, 1,

    2, 6, 7,
    3, 7, 8,
    4, 8, 9,
    5, 9, 10,
    1, 10, 6,

    11, 7, 6,
    11, 8, 7,
    11, 9, 8,
    11, 10, 9,
    11, 6, 10,
];

fn add_triangle(mesh: &mut Mesh, a: Vector3<f32>, b: Vector3<f32>, c: Vector3<f32>) {
    let i0 = mesh.add_vertex(a);
    let i1 = mesh.add_vertex(b);
    let i2 = mesh.add_vertex(c);
    mesh.add_triangle(Triangle::new(i0, i1, i2));
}

/// Midpoint of an edge, shared between the triangles bordering it
fn edge_midpoint(
    positions: &mut Vec<Vector3<f32>>,
    cache: &mut HashMap<(i32, i32), i32>,
    a: i32,
    b: i32,
) -> i32 {
    let key = if a < b { (a, b) } else { (b, a) };
    if let Some(&index) = cache.get(&key) {
        return index;
    }

    let mid = ((positions[a as usize] + positions[b as usize]) * 0.5).normalize();
    let index = positions.len() as i32;
    positions.push(mid);
    cache.insert(key, index);
    index
}
