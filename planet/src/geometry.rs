//! CPU-side meshes and parametric surfaces.
//!
//! A [`ParametricSurface`] maps `(u, v)` to a point and a normal;
//! [`tessellate`] samples it on a regular grid and emits both a triangle
//! list (for filled drawing) and a line list (for wireframes), so one upload
//! serves either mode.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::f32::consts::PI;
use std::ops::RangeInclusive;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_SURFACE_SEGMENTS;
use crate::error::PlanetError;

/// Vertex attributes plus two index lists over them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// `xyz` per vertex.
    pub positions: Vec<f32>,
    /// `xyz` per vertex, unit length.
    pub normals: Vec<f32>,
    /// `uv` per vertex in `[0, 1]`.
    pub tex_coords: Vec<f32>,
    /// Three indices per triangle, counter-clockwise.
    pub triangles: Vec<u16>,
    /// Two indices per line segment.
    pub lines: Vec<u16>,
}

impl Mesh {
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Position of vertex `i`.
    #[must_use]
    pub fn position(&self, i: usize) -> Option<Vec3> {
        self.positions.get(i * 3..i * 3 + 3).map(Vec3::from_slice)
    }

    /// Normal of vertex `i`.
    #[must_use]
    pub fn normal(&self, i: usize) -> Option<Vec3> {
        self.normals.get(i * 3..i * 3 + 3).map(Vec3::from_slice)
    }

    fn push_vertex(&mut self, position: Vec3, normal: Vec3, uv: [f32; 2]) {
        self.positions.extend_from_slice(&position.to_array());
        self.normals.extend_from_slice(&normal.to_array());
        self.tex_coords.extend_from_slice(&uv);
    }
}

/// Tessellation settings, as passed from host configuration objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceConfig {
    #[serde(default = "default_segments")]
    pub u_segments: u16,
    #[serde(default = "default_segments")]
    pub v_segments: u16,
    /// Draw the line list instead of the triangles.
    #[serde(default)]
    pub wireframe: bool,
}

fn default_segments() -> u16 {
    DEFAULT_SURFACE_SEGMENTS
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self { u_segments: DEFAULT_SURFACE_SEGMENTS, v_segments: DEFAULT_SURFACE_SEGMENTS, wireframe: false }
    }
}

impl SurfaceConfig {
    #[must_use]
    pub fn new(u_segments: u16, v_segments: u16) -> Self {
        Self { u_segments, v_segments, wireframe: false }
    }

    #[must_use]
    pub fn wireframe(mut self) -> Self {
        self.wireframe = true;
        self
    }
}

/// A surface given by `(u, v) -> point`.
pub trait ParametricSurface {
    fn position(&self, u: f32, v: f32) -> Vec3;

    /// Outward unit normal at `(u, v)`.
    fn normal(&self, u: f32, v: f32) -> Vec3;

    fn u_range(&self) -> RangeInclusive<f32>;

    fn v_range(&self) -> RangeInclusive<f32>;
}

/// Sample `surface` on a `(u_segments + 1) x (v_segments + 1)` grid.
///
/// Each grid quad contributes two triangles and two line segments (along
/// `u` and along `v`), so the line list outlines every quad without
/// duplicating shared edges. Zero segment counts are treated as one.
///
/// # Errors
///
/// Returns [`PlanetError::MeshTooLarge`] if the grid has more vertices than
/// `u16` indices can address.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn tessellate(surface: &dyn ParametricSurface, config: &SurfaceConfig) -> Result<Mesh, PlanetError> {
    let nu = usize::from(config.u_segments.max(1));
    let nv = usize::from(config.v_segments.max(1));
    let vertices = (nu + 1) * (nv + 1);
    if vertices > usize::from(u16::MAX) + 1 {
        return Err(PlanetError::MeshTooLarge(vertices));
    }

    let (u0, u1) = surface.u_range().into_inner();
    let (v0, v1) = surface.v_range().into_inner();
    let mut mesh = Mesh::default();

    for i in 0..=nu {
        let s = i as f32 / nu as f32;
        let u = (u1 - u0).mul_add(s, u0);
        for j in 0..=nv {
            let t = j as f32 / nv as f32;
            let v = (v1 - v0).mul_add(t, v0);
            mesh.push_vertex(surface.position(u, v), surface.normal(u, v), [s, t]);
        }
    }

    let index = |i: usize, j: usize| (i * (nv + 1) + j) as u16;
    for i in 0..nu {
        for j in 0..nv {
            let (a, b, c, d) = (index(i, j), index(i + 1, j), index(i, j + 1), index(i + 1, j + 1));
            mesh.triangles.extend_from_slice(&[a, b, c, c, b, d]);
            mesh.lines.extend_from_slice(&[a, b, a, c]);
        }
    }

    log::debug!("tessellated {nu}x{nv} surface: {vertices} vertices, {} triangles", mesh.triangles.len() / 3);
    Ok(mesh)
}

/// Sphere around the origin with its poles on the Z axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub radius: f32,
}

impl ParametricSurface for Sphere {
    fn position(&self, u: f32, v: f32) -> Vec3 {
        self.normal(u, v) * self.radius
    }

    fn normal(&self, u: f32, v: f32) -> Vec3 {
        Vec3::new(v.sin() * u.cos(), v.sin() * u.sin(), v.cos())
    }

    fn u_range(&self) -> RangeInclusive<f32> {
        -PI..=PI
    }

    fn v_range(&self) -> RangeInclusive<f32> {
        0.0..=PI
    }
}

/// Torus around the Z axis: ring radius `radius`, tube radius `tube`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Torus {
    pub radius: f32,
    pub tube: f32,
}

impl ParametricSurface for Torus {
    fn position(&self, u: f32, v: f32) -> Vec3 {
        let ring = self.tube.mul_add(v.cos(), self.radius);
        Vec3::new(ring * u.cos(), ring * u.sin(), self.tube * v.sin())
    }

    fn normal(&self, u: f32, v: f32) -> Vec3 {
        Vec3::new(v.cos() * u.cos(), v.cos() * u.sin(), v.sin())
    }

    fn u_range(&self) -> RangeInclusive<f32> {
        -PI..=PI
    }

    fn v_range(&self) -> RangeInclusive<f32> {
        -PI..=PI
    }
}
