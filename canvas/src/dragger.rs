//! Draggers: movable control points bound to a shape's geometry.
//!
//! A [`Dragger`] is a get/set capability pair over one field of a shape.
//! `get` reads the control point from the shape; `set` consumes a
//! [`DragEvent`] and writes the shape. The dragger does not hold the shape;
//! the controller keeps the owning object id and hands the shape in on every
//! call, so draggers are plain values that are rebuilt on each selection.

#[cfg(test)]
#[path = "dragger_test.rs"]
mod dragger_test;

use std::f64::consts::TAU;

use crate::consts::{HANDLE_HIT_SLOP, HANDLE_LINE_WIDTH};
use crate::error::CanvasError;
use crate::input::DragEvent;
use crate::shape::Shape;
use crate::style::Color;
use crate::surface::Surface;
use crate::vec2::Point;

/// Which control point of a circle a dragger moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircleHandle {
    /// The center point; dragging moves the whole circle.
    Center,
    /// The point at 0° on the circle; horizontal drag changes the radius.
    Radius,
}

/// Which end of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnd {
    Start,
    End,
}

/// The shape field a dragger is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    Circle(CircleHandle),
    Line(LineEnd),
}

/// How a dragger's control point is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DraggerStyle {
    pub radius: f64,
    pub color: Color,
    /// Filled disc when `true`, outlined ring otherwise.
    pub filled: bool,
}

/// A draggable control point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dragger {
    pub handle: Handle,
    pub style: DraggerStyle,
}

impl Dragger {
    #[must_use]
    pub fn new(handle: Handle, style: DraggerStyle) -> Self {
        Self { handle, style }
    }

    /// Current position of the control point, or `None` if `shape` is not
    /// the kind of shape this dragger was made for.
    #[must_use]
    pub fn get(&self, shape: &Shape) -> Option<Point> {
        match (self.handle, shape) {
            (Handle::Circle(h), Shape::Circle(c)) => Some(c.handle_position(h)),
            (Handle::Line(end), Shape::Line(l)) => Some(l.endpoint(end)),
            _ => None,
        }
    }

    /// Apply one drag step to `shape`. Returns `true` if the shape changed.
    pub fn set(&self, shape: &mut Shape, event: &DragEvent) -> bool {
        match (self.handle, shape) {
            (Handle::Circle(h), Shape::Circle(c)) => c.drag_handle(h, event),
            (Handle::Line(end), Shape::Line(l)) => l.drag_endpoint(end, event),
            _ => false,
        }
    }

    /// Whether `pos` is close enough to the control point to grab it.
    #[must_use]
    pub fn is_hit(&self, shape: &Shape, pos: Point) -> bool {
        self.get(shape)
            .is_some_and(|p| p.distance(pos) <= self.style.radius + HANDLE_HIT_SLOP)
    }

    /// Draw the control point of `shape`.
    ///
    /// # Errors
    ///
    /// Propagates surface failures.
    pub fn draw(&self, shape: &Shape, surface: &mut dyn Surface) -> Result<(), CanvasError> {
        let Some(p) = self.get(shape) else {
            return Ok(());
        };
        surface.begin_path();
        surface.arc(p, self.style.radius, 0.0, TAU)?;
        surface.close_path();
        if self.style.filled {
            surface.set_fill_color(self.style.color);
            surface.fill();
        } else {
            surface.set_line_width(HANDLE_LINE_WIDTH);
            surface.set_stroke_color(self.style.color);
            surface.stroke();
        }
        Ok(())
    }
}
