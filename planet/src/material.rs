//! Phong material parameters uploaded as the `material` uniform struct.

use glam::Vec3;

use crate::backend::{Backend, ProgramId, Uniform};
use crate::error::PlanetError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhongMaterial {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub shininess: f32,
}

impl PhongMaterial {
    /// The reddish material used for the equator ring and the planet.
    #[must_use]
    pub fn reddish(shininess: f32) -> Self {
        Self {
            ambient: Vec3::new(0.5, 0.3, 0.3),
            diffuse: Vec3::new(0.8, 0.2, 0.2),
            specular: Vec3::splat(0.4),
            shininess,
        }
    }

    /// Set `material.ambient`, `.diffuse`, `.specular`, `.shininess`.
    pub fn apply(&self, backend: &mut dyn Backend, program: ProgramId) -> Result<(), PlanetError> {
        backend.set_uniform(program, "material.ambient", Uniform::Vec3(self.ambient))?;
        backend.set_uniform(program, "material.diffuse", Uniform::Vec3(self.diffuse))?;
        backend.set_uniform(program, "material.specular", Uniform::Vec3(self.specular))?;
        backend.set_uniform(program, "material.shininess", Uniform::Float(self.shininess))
    }
}
