use meshprim::{primitives, Mesh, Triangle};
use nalgebra::Vector3;

#[test]
fn test_mesh_bounding_box() {
    // Create a simple mesh with known bounds
    let mut mesh = Mesh::new();

    // Add vertices at specific positions
    let v0 = mesh.add_vertex(Vector3::new(0.0, 0.0, 0.0));
    let v1 = mesh.add_vertex(Vector3::new(10.0, 0.0, 0.0));
    let v2 = mesh.add_vertex(Vector3::new(5.0, 10.0, 0.0));
    let v3 = mesh.add_vertex(Vector3::new(5.0, 5.0, 5.0));

    // Add triangles
    mesh.add_triangle(Triangle::new(v0, v1, v2));
    mesh.add_triangle(Triangle::new(v0, v1, v3));

    println!(
        "Mesh has {} vertices and {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    let bbox = mesh.bounding_box();
    let min = bbox.min();
    let max = bbox.max();

    // Verify bounding box contains all vertices
    assert!(min.x <= 0.0 && max.x >= 10.0, "X bounds incorrect");
    assert!(min.y <= 0.0 && max.y >= 10.0, "Y bounds incorrect");
    assert!(min.z <= 0.0 && max.z >= 5.0, "Z bounds incorrect");

    for i in 0..mesh.vertex_count() {
        let v = mesh.get_vertex(i).expect("Missing vertex");
        assert!(bbox.contains(v), "Vertex {} outside bounding box", i);
    }
}

#[test]
fn test_cube_surface_area_and_volume() {
    let cube = primitives::cube(Some(Vector3::new(2.0, 2.0, 2.0)), None);

    let area = cube.surface_area().expect("Failed to compute area");
    assert!((area - 24.0).abs() < 1e-4, "Cube surface area was {}", area);

    let volume = cube.signed_volume().expect("Failed to compute volume");
    assert!((volume - 8.0).abs() < 1e-4, "Cube signed volume was {}", volume);
}

#[test]
fn test_cube_face_normals_point_outward() {
    let cube = primitives::cube(None, Some(Vector3::new(1.0, 2.0, 3.0)));
    let center = cube.bounding_box().center();

    for i in 0..cube.triangle_count() {
        let (a, b, c) = cube
            .get_triangle_vertices(i)
            .expect("Missing triangle vertices");
        let centroid = (a + b + c) / 3.0;
        let normal = cube.triangle_normal(i).expect("Failed to compute normal");
        assert!(
            normal.dot(&(centroid - center)) > 0.0,
            "Triangle {} winds inward",
            i
        );
    }
}

#[test]
fn test_positions_and_indices_slices() {
    let mut mesh = Mesh::new();
    mesh.add_triangle_vertices(
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
    );

    assert_eq!(mesh.positions().len(), 3);
    assert_eq!(mesh.indices().len(), 1);
    assert!(mesh.normals().is_empty());
    assert_eq!(mesh.indices()[0].indices(), [0, 1, 2]);
}
