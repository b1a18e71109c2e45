//! Continuous rotation of the world about Y.

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

use crate::consts::DEFAULT_ANIMATION_SPEED;
use crate::scene::{Joint, PlanetScene};

/// Spins the world while running; stopped by default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    running: bool,
    /// Degrees per second.
    speed: f32,
}

impl Default for Animation {
    fn default() -> Self {
        Self { running: false, speed: DEFAULT_ANIMATION_SPEED }
    }
}

impl Animation {
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn resume(&mut self) {
        self.running = true;
    }

    /// Non-finite speeds are ignored.
    pub fn set_speed(&mut self, degrees_per_second: f32) {
        if degrees_per_second.is_finite() {
            self.speed = degrees_per_second;
        } else {
            log::warn!("ignoring animation speed {degrees_per_second}");
        }
    }

    /// Advance by `dt` seconds. Returns whether the scene changed.
    pub fn tick(&self, scene: &mut PlanetScene, dt: f32) -> bool {
        if !self.running || !dt.is_finite() || dt <= 0.0 {
            return false;
        }
        scene.rotate_joint(Joint::WorldY, self.speed * dt);
        true
    }
}
