#![allow(clippy::float_cmp)]

use super::*;

const UNIT: Sphere = Sphere { radius: 1.0 };

// =============================================================
// Tessellation
// =============================================================

#[test]
fn grid_vertex_and_index_counts() {
    let mesh = tessellate(&UNIT, &SurfaceConfig::new(4, 3)).unwrap();
    assert_eq!(mesh.vertex_count(), 5 * 4);
    assert_eq!(mesh.normals.len(), mesh.positions.len());
    assert_eq!(mesh.tex_coords.len(), 2 * 20);
    assert_eq!(mesh.triangles.len(), 4 * 3 * 6);
    assert_eq!(mesh.lines.len(), 4 * 3 * 4);
}

#[test]
fn indices_stay_in_range() {
    let mesh = tessellate(&UNIT, &SurfaceConfig::new(7, 5)).unwrap();
    let n = mesh.vertex_count();
    assert!(mesh.triangles.iter().chain(&mesh.lines).all(|&i| usize::from(i) < n));
}

#[test]
fn first_quad_indices() {
    let mesh = tessellate(&UNIT, &SurfaceConfig::new(2, 2)).unwrap();
    // Row stride is v_segments + 1 = 3.
    assert_eq!(&mesh.triangles[..6], &[0, 3, 1, 1, 3, 4]);
    assert_eq!(&mesh.lines[..4], &[0, 3, 0, 1]);
}

#[test]
fn tex_coords_span_unit_square() {
    let mesh = tessellate(&UNIT, &SurfaceConfig::new(2, 2)).unwrap();
    assert_eq!(&mesh.tex_coords[..2], &[0.0, 0.0]);
    assert_eq!(&mesh.tex_coords[mesh.tex_coords.len() - 2..], &[1.0, 1.0]);
}

#[test]
fn zero_segments_are_clamped() {
    let mesh = tessellate(&UNIT, &SurfaceConfig::new(0, 0)).unwrap();
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.triangles.len(), 6);
}

#[test]
fn oversized_grid_is_rejected() {
    let err = tessellate(&UNIT, &SurfaceConfig::new(300, 300)).unwrap_err();
    assert!(matches!(err, PlanetError::MeshTooLarge(90_601)));
}

// =============================================================
// Config
// =============================================================

#[test]
fn config_json_defaults() {
    let c: SurfaceConfig = serde_json::from_str(r#"{"uSegments": 80, "wireframe": true}"#).unwrap();
    assert_eq!(c, SurfaceConfig { u_segments: 80, v_segments: 20, wireframe: true });
    assert_eq!(SurfaceConfig::new(80, 40).wireframe(), SurfaceConfig { u_segments: 80, v_segments: 40, wireframe: true });
}

// =============================================================
// Surfaces
// =============================================================

#[test]
fn sphere_points_lie_on_radius() {
    let sphere = Sphere { radius: 2.5 };
    let mesh = tessellate(&sphere, &SurfaceConfig::new(12, 6)).unwrap();
    for i in 0..mesh.vertex_count() {
        let p = mesh.position(i).unwrap();
        assert!((p.length() - 2.5).abs() < 1e-5, "{p}");
        assert!(mesh.normal(i).unwrap().abs_diff_eq(p / 2.5, 1e-5));
    }
}

#[test]
fn sphere_poles_on_z() {
    let sphere = Sphere { radius: 1.0 };
    assert!(sphere.position(0.3, 0.0).abs_diff_eq(Vec3::Z, 1e-6));
    assert!(sphere.position(0.3, PI).abs_diff_eq(-Vec3::Z, 1e-6));
}

#[test]
fn torus_outer_and_inner_equator() {
    let torus = Torus { radius: 1.2, tube: 0.04 };
    assert!(torus.position(0.0, 0.0).abs_diff_eq(Vec3::new(1.24, 0.0, 0.0), 1e-6));
    assert!(torus.position(0.0, PI).abs_diff_eq(Vec3::new(1.16, 0.0, 0.0), 1e-6));
    assert!(torus.normal(0.0, PI).abs_diff_eq(-Vec3::X, 1e-6));
}

#[test]
fn torus_points_are_tube_distance_from_ring() {
    let torus = Torus { radius: 1.2, tube: 0.04 };
    let mesh = tessellate(&torus, &SurfaceConfig::new(16, 8)).unwrap();
    for i in 0..mesh.vertex_count() {
        let p = mesh.position(i).unwrap();
        let ring = Vec3::new(p.x, p.y, 0.0).normalize() * 1.2;
        assert!(((p - ring).length() - 0.04).abs() < 1e-5);
    }
}
