//! Directional light uploaded as the `light` uniform struct.

use glam::{Mat3, Mat4, Vec3};

use crate::backend::{Backend, ProgramId, Uniform};
use crate::error::PlanetError;

/// A light infinitely far away, shining along `direction`.
///
/// The light is placed in the scene graph like any other item, so the
/// model-view matrix it sees decides its eye-space direction. It writes to
/// every program in `programs`, not only the one of its node, because the
/// lit objects usually sit in sibling nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionalLight {
    pub direction: Vec3,
    pub color: Vec3,
    pub programs: Vec<ProgramId>,
}

impl DirectionalLight {
    /// Set `light.direction` (eye space, unit length) and `light.color`.
    pub fn apply(&self, backend: &mut dyn Backend, model_view: Mat4) -> Result<(), PlanetError> {
        let direction = eye_direction(model_view, self.direction);
        for &program in &self.programs {
            backend.set_uniform(program, "light.direction", Uniform::Vec3(direction))?;
            backend.set_uniform(program, "light.color", Uniform::Vec3(self.color))?;
        }
        Ok(())
    }
}

/// Rotate a world direction into eye space; translation is ignored.
#[must_use]
pub fn eye_direction(model_view: Mat4, direction: Vec3) -> Vec3 {
    (Mat3::from_mat4(model_view) * direction).normalize_or_zero()
}
