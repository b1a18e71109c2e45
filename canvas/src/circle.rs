//! Circle: a stroked outline around a center point.

#[cfg(test)]
#[path = "circle_test.rs"]
mod circle_test;

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::consts::{CENTER_HANDLE_RADIUS, MIN_RADIUS, RADIUS_HANDLE_RADIUS};
use crate::dragger::{CircleHandle, Dragger, DraggerStyle, Handle};
use crate::error::CanvasError;
use crate::input::DragEvent;
use crate::style::Style;
use crate::surface::Surface;
use crate::vec2::Point;

/// A circle outline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Circle {
    #[serde(default)]
    pub center: Point,
    /// Never negative.
    #[serde(default)]
    pub radius: f64,
    #[serde(default)]
    pub style: Style,
}

impl Circle {
    /// Create a circle. A negative or NaN radius is stored as `0`.
    #[must_use]
    pub fn new(center: Point, radius: f64, style: Style) -> Self {
        log::debug!("creating circle at ({}, {}) with radius {radius}", center.x, center.y);
        Self { center, radius: radius.max(0.0), style }
    }

    /// Stroke the outline with the circle's style.
    ///
    /// # Errors
    ///
    /// Propagates surface failures.
    pub fn draw(&self, surface: &mut dyn Surface) -> Result<(), CanvasError> {
        surface.begin_path();
        surface.arc(self.center, self.radius, 0.0, TAU)?;
        surface.close_path();
        surface.set_line_width(self.style.width);
        surface.set_stroke_color(self.style.color);
        surface.stroke();
        Ok(())
    }

    /// Whether `pos` lies on the outline, within half the stroke width plus
    /// the fixed hit tolerance.
    #[must_use]
    pub fn is_hit(&self, pos: Point) -> bool {
        let dist = self.center.distance(pos);
        let delta = (dist - self.radius).abs();
        delta <= self.style.hit_accuracy()
    }

    /// A hollow center handle and a filled radius handle, both in the
    /// circle's color.
    #[must_use]
    pub fn create_draggers(&self) -> Vec<Dragger> {
        let color = self.style.color;
        vec![
            Dragger::new(
                Handle::Circle(CircleHandle::Center),
                DraggerStyle { radius: CENTER_HANDLE_RADIUS, color, filled: false },
            ),
            Dragger::new(
                Handle::Circle(CircleHandle::Radius),
                DraggerStyle { radius: RADIUS_HANDLE_RADIUS, color, filled: true },
            ),
        ]
    }

    /// Position of a control point.
    #[must_use]
    pub fn handle_position(&self, handle: CircleHandle) -> Point {
        match handle {
            CircleHandle::Center => self.center,
            CircleHandle::Radius => self.center + Point::new(self.radius, 0.0),
        }
    }

    /// Apply a drag step to a control point. Returns `true` if the circle
    /// changed.
    ///
    /// The center follows the absolute pointer position. The radius grows by
    /// the horizontal delta, but a step that would leave it below
    /// [`MIN_RADIUS`] is dropped entirely rather than clamped.
    pub fn drag_handle(&mut self, handle: CircleHandle, event: &DragEvent) -> bool {
        match handle {
            CircleHandle::Center => {
                self.center = event.position;
                true
            }
            CircleHandle::Radius => {
                let radius = self.radius + event.delta.x;
                if radius >= MIN_RADIUS {
                    self.radius = radius;
                    true
                } else {
                    false
                }
            }
        }
    }
}
