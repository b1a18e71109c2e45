//! Straight line segment between two endpoints.

#[cfg(test)]
#[path = "line_test.rs"]
mod line_test;

use serde::{Deserialize, Serialize};

use crate::consts::ENDPOINT_HANDLE_RADIUS;
use crate::dragger::{Dragger, DraggerStyle, Handle, LineEnd};
use crate::error::CanvasError;
use crate::input::DragEvent;
use crate::style::Style;
use crate::surface::Surface;
use crate::vec2::{self, Point};

/// A straight line segment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Line {
    #[serde(default)]
    pub start: Point,
    #[serde(default)]
    pub end: Point,
    #[serde(default)]
    pub style: Style,
}

impl Line {
    #[must_use]
    pub fn new(start: Point, end: Point, style: Style) -> Self {
        log::debug!(
            "creating line from ({}, {}) to ({}, {})",
            start.x,
            start.y,
            end.x,
            end.y
        );
        Self { start, end, style }
    }

    /// Stroke the segment with the line's style.
    ///
    /// # Errors
    ///
    /// Propagates surface failures.
    pub fn draw(&self, surface: &mut dyn Surface) -> Result<(), CanvasError> {
        surface.begin_path();
        surface.move_to(self.start);
        surface.line_to(self.end);
        surface.set_line_width(self.style.width);
        surface.set_stroke_color(self.style.color);
        surface.stroke();
        Ok(())
    }

    /// Whether `pos` projects onto the segment and lies within half the
    /// stroke width plus the fixed hit tolerance of it.
    #[must_use]
    pub fn is_hit(&self, pos: Point) -> bool {
        segment_hit(pos, self.start, self.end, self.style.hit_accuracy())
    }

    /// One filled handle per endpoint, in the line's color.
    #[must_use]
    pub fn create_draggers(&self) -> Vec<Dragger> {
        let style = DraggerStyle { radius: ENDPOINT_HANDLE_RADIUS, color: self.style.color, filled: true };
        vec![
            Dragger::new(Handle::Line(LineEnd::Start), style),
            Dragger::new(Handle::Line(LineEnd::End), style),
        ]
    }

    #[must_use]
    pub fn endpoint(&self, end: LineEnd) -> Point {
        match end {
            LineEnd::Start => self.start,
            LineEnd::End => self.end,
        }
    }

    /// Move an endpoint to the absolute pointer position.
    pub fn drag_endpoint(&mut self, end: LineEnd, event: &DragEvent) -> bool {
        match end {
            LineEnd::Start => self.start = event.position,
            LineEnd::End => self.end = event.position,
        }
        true
    }
}

/// Hit rule shared by lines and curve segments.
pub(crate) fn segment_hit(pos: Point, a: Point, b: Point, accuracy: f64) -> bool {
    vec2::distance_to_segment(pos, a, b).is_some_and(|d| d <= accuracy)
}
