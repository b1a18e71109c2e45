//! Band: two stacked circles joined into a strip.
//!
//! One ring sits at `y = height / 2`, the other at `y = -height / 2`, both
//! around the Y axis. Vertices alternate top, bottom, top, bottom, so
//! quad `k` spans vertices `2k ..= 2k + 3`.

#[cfg(test)]
#[path = "band_test.rs"]
mod band_test;

use std::f32::consts::TAU;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::PlanetError;
use crate::geometry::Mesh;

/// Band parameters; every field falls back to its default when omitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BandConfig {
    pub radius: f32,
    pub height: f32,
    pub segments: u16,
    /// Draw the quad outlines.
    pub as_wireframe: bool,
    /// Draw the quads.
    pub filled: bool,
}

impl Default for BandConfig {
    fn default() -> Self {
        Self { radius: 1.0, height: 0.1, segments: 20, as_wireframe: false, filled: false }
    }
}

/// A band mesh together with the config it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    pub config: BandConfig,
    pub mesh: Mesh,
}

impl Band {
    /// Build the band mesh. Zero segments are treated as one.
    ///
    /// # Errors
    ///
    /// Returns [`PlanetError::MeshTooLarge`] if the band needs more vertices
    /// than `u16` indices can address.
    pub fn new(config: BandConfig) -> Result<Self, PlanetError> {
        let mesh = config.build()?;
        Ok(Self { config, mesh })
    }
}

impl BandConfig {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn build(&self) -> Result<Mesh, PlanetError> {
        let segments = usize::from(self.segments.max(1));
        let vertices = 2 * (segments + 1);
        if vertices > usize::from(u16::MAX) + 1 {
            return Err(PlanetError::MeshTooLarge(vertices));
        }
        log::debug!(
            "creating {}band: radius={}, height={}, segments={segments}",
            if self.as_wireframe { "wireframe " } else { "" },
            self.radius,
            self.height
        );

        let half = self.height / 2.0;
        let mut mesh = Mesh::default();
        for i in 0..=segments {
            let s = i as f32 / segments as f32;
            let (sin, cos) = (s * TAU).sin_cos();
            let normal = Vec3::new(sin, 0.0, cos);
            for (y, v) in [(half, 0.0), (-half, 1.0)] {
                mesh.positions.extend_from_slice(&[sin * self.radius, y, cos * self.radius]);
                mesh.normals.extend_from_slice(&normal.to_array());
                mesh.tex_coords.extend_from_slice(&[s, v]);
            }
        }

        for i in (0..2 * segments).step_by(2) {
            let i = i as u16;
            mesh.triangles.extend_from_slice(&[i, i + 1, i + 2, i + 2, i + 1, i + 3]);
            mesh.lines.extend_from_slice(&[i, i + 1, i, i + 2, i + 1, i + 3, i + 2, i + 3]);
        }
        Ok(mesh)
    }
}
