//! Fixed perspective camera looking at the origin.

use glam::{Mat4, Vec3};

use crate::consts::{CAMERA_EYE, CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Camera {
    /// Camera at [`CAMERA_EYE`] with +Y up, for a viewport of the given
    /// aspect ratio (width / height). Non-positive or non-finite ratios fall
    /// back to 1.
    #[must_use]
    pub fn new(aspect: f32) -> Self {
        let mut camera = Self {
            view: Mat4::look_at_rh(Vec3::from_array(CAMERA_EYE), Vec3::ZERO, Vec3::Y),
            projection: Mat4::IDENTITY,
        };
        camera.set_aspect(aspect);
        camera
    }

    /// Recompute the projection for a resized viewport.
    pub fn set_aspect(&mut self, aspect: f32) {
        let aspect = if aspect.is_finite() && aspect > 0.0 { aspect } else { 1.0 };
        self.projection = Mat4::perspective_rh_gl(CAMERA_FOV_DEG.to_radians(), aspect, CAMERA_NEAR, CAMERA_FAR);
    }
}
