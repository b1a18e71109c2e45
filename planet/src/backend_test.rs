use super::*;

fn triangle() -> Mesh {
    Mesh {
        positions: vec![0.0; 9],
        normals: vec![0.0; 9],
        tex_coords: vec![0.0; 6],
        triangles: vec![0, 1, 2],
        lines: vec![0, 1, 1, 2, 2, 0],
    }
}

#[test]
fn handles_are_sequential() {
    let mut b = RecordingBackend::new();
    assert_eq!(b.create_program("vs", "fs").unwrap(), ProgramId(0));
    assert_eq!(b.create_program("vs2", "fs2").unwrap(), ProgramId(1));
    assert_eq!(b.program_sources(ProgramId(1)), Some(("vs2", "fs2")));
    assert_eq!(b.upload_mesh(&triangle()).unwrap(), MeshId(0));
    assert_eq!(b.create_texture(), TextureId(0));
}

#[test]
fn upload_records_counts() {
    let mut b = RecordingBackend::new();
    b.upload_mesh(&triangle()).unwrap();
    assert_eq!(b.calls, vec![Call::UploadMesh { mesh: MeshId(0), vertices: 3, triangles: 1, lines: 3 }]);
}

#[test]
fn uniform_returns_latest_value() {
    let mut b = RecordingBackend::new();
    let p = b.create_program("vs", "fs").unwrap();
    b.set_uniform(p, "clouds", Uniform::Bool(false)).unwrap();
    b.set_uniform(p, "clouds", Uniform::Bool(true)).unwrap();
    assert_eq!(b.uniform(p, "clouds"), Some(Uniform::Bool(true)));
    assert_eq!(b.uniform(p, "nightLights"), None);
}

#[test]
fn unknown_handles_are_rejected() {
    let mut b = RecordingBackend::new();
    assert!(matches!(
        b.set_uniform(ProgramId(3), "x", Uniform::Int(1)),
        Err(PlanetError::UnknownProgram(ProgramId(3)))
    ));
    let p = b.create_program("vs", "fs").unwrap();
    assert!(matches!(b.draw_mesh(p, MeshId(0), DrawMode::Lines), Err(PlanetError::UnknownMesh(_))));
    assert!(matches!(b.bind_texture(p, "t", 0, TextureId(0)), Err(PlanetError::UnknownTexture(_))));
}

#[test]
fn draws_lists_only_draw_calls() {
    let mut b = RecordingBackend::new();
    let p = b.create_program("vs", "fs").unwrap();
    let m = b.upload_mesh(&triangle()).unwrap();
    b.begin_frame(Vec4::ONE);
    b.draw_mesh(p, m, DrawMode::Triangles).unwrap();
    b.draw_mesh(p, m, DrawMode::Lines).unwrap();
    assert_eq!(b.draws(), vec![(p, m, DrawMode::Triangles), (p, m, DrawMode::Lines)]);
    b.clear_calls();
    assert!(b.draws().is_empty());
    assert!(b.draw_mesh(p, m, DrawMode::Lines).is_ok());
}
