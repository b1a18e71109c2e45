#![allow(clippy::float_cmp)]

use super::*;

fn band(segments: u16) -> Band {
    Band::new(BandConfig { segments, ..BandConfig::default() }).unwrap()
}

// =============================================================
// Config
// =============================================================

#[test]
fn defaults() {
    let c = BandConfig::default();
    assert_eq!(c.radius, 1.0);
    assert_eq!(c.height, 0.1);
    assert_eq!(c.segments, 20);
    assert!(!c.as_wireframe);
    assert!(!c.filled);
}

#[test]
fn empty_json_gives_defaults() {
    let c: BandConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(c, BandConfig::default());
}

#[test]
fn json_uses_camel_case() {
    let c: BandConfig = serde_json::from_str(r#"{"asWireframe": true, "segments": 4}"#).unwrap();
    assert!(c.as_wireframe);
    assert_eq!(c.segments, 4);
    assert_eq!(c.radius, 1.0);
}

// =============================================================
// Vertices
// =============================================================

#[test]
fn two_vertices_per_ring_position() {
    let b = band(20);
    assert_eq!(b.mesh.vertex_count(), 42);
    assert_eq!(b.mesh.tex_coords.len(), 84);
}

#[test]
fn rings_at_half_height() {
    let b = band(4);
    assert_eq!(b.mesh.position(0), Some(Vec3::new(0.0, 0.05, 1.0)));
    assert_eq!(b.mesh.position(1), Some(Vec3::new(0.0, -0.05, 1.0)));
    for i in 0..b.mesh.vertex_count() {
        let p = b.mesh.position(i).unwrap();
        assert!((p.x.hypot(p.z) - 1.0).abs() < 1e-6);
        assert_eq!(p.y.abs(), 0.05);
    }
}

#[test]
fn first_and_last_ring_positions_coincide() {
    let b = band(8);
    let first = b.mesh.position(0).unwrap();
    let last = b.mesh.position(16).unwrap();
    assert!(first.abs_diff_eq(last, 1e-6));
}

#[test]
fn normals_point_outward() {
    let b = band(6);
    for i in 0..b.mesh.vertex_count() {
        let p = b.mesh.position(i).unwrap();
        let n = b.mesh.normal(i).unwrap();
        assert!(n.abs_diff_eq(Vec3::new(p.x, 0.0, p.z).normalize(), 1e-5));
    }
}

// =============================================================
// Indices
// =============================================================

#[test]
fn fill_indices_form_two_triangles_per_quad() {
    let b = band(2);
    assert_eq!(b.mesh.triangles, vec![0, 1, 2, 2, 1, 3, 2, 3, 4, 4, 3, 5]);
}

#[test]
fn wireframe_indices_outline_each_quad() {
    let b = band(1);
    assert_eq!(b.mesh.lines, vec![0, 1, 0, 2, 1, 3, 2, 3]);
    assert_eq!(band(20).mesh.lines.len(), 20 * 8);
}

#[test]
fn zero_segments_behaves_like_one() {
    assert_eq!(band(0).mesh, band(1).mesh);
}

#[test]
fn too_many_segments_is_rejected() {
    let err = Band::new(BandConfig { segments: u16::MAX, ..BandConfig::default() }).unwrap_err();
    assert!(matches!(err, PlanetError::MeshTooLarge(131_072)));
}
