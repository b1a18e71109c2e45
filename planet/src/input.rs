//! Keyboard bindings for the scene joints.
//!
//! Each joint has a lower-case key that turns it forward and the same key
//! with Shift that turns it back.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::consts::KEY_ROTATION_STEP_DEG;
use crate::scene::Joint;

/// Joint and signed rotation in degrees for a DOM `KeyboardEvent.key`.
#[must_use]
pub fn key_rotation(key: &str) -> Option<(Joint, f32)> {
    match key {
        "x" => Some((Joint::WorldX, KEY_ROTATION_STEP_DEG)),
        "X" => Some((Joint::WorldX, -KEY_ROTATION_STEP_DEG)),
        "y" => Some((Joint::WorldY, KEY_ROTATION_STEP_DEG)),
        "Y" => Some((Joint::WorldY, -KEY_ROTATION_STEP_DEG)),
        _ => None,
    }
}
