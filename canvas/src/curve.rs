//! Parametric curve `(x(t), y(t))` for `t` in `[t_min, t_max]`, drawn as a
//! polyline through evenly spaced samples.

#[cfg(test)]
#[path = "curve_test.rs"]
mod curve_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_SEGMENTS, MAX_SEGMENTS, TICK_HALF_LENGTH};
use crate::dragger::Dragger;
use crate::error::CanvasError;
use crate::expr::{Expr, ExprError};
use crate::line::segment_hit;
use crate::style::Style;
use crate::surface::Surface;
use crate::vec2::Point;

/// A curve defined by two functions of `t`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParametricCurve {
    pub x_fn: Expr,
    pub y_fn: Expr,
    #[serde(default)]
    pub t_min: f64,
    #[serde(default = "default_t_max")]
    pub t_max: f64,
    /// Number of polyline segments; sampled as `1..=MAX_SEGMENTS`.
    #[serde(default = "default_segments")]
    pub segments: u32,
    /// Draw short normal strokes at each interior sample.
    #[serde(default)]
    pub tick_marks: bool,
    #[serde(default)]
    pub style: Style,
}

fn default_t_max() -> f64 {
    std::f64::consts::TAU
}

fn default_segments() -> u32 {
    DEFAULT_SEGMENTS
}

impl ParametricCurve {
    /// Parse both functions and build the curve.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError`] if either function does not parse.
    pub fn new(x_fn: &str, y_fn: &str, t_min: f64, t_max: f64, segments: u32, style: Style) -> Result<Self, ExprError> {
        let x_fn = Expr::parse(x_fn)?;
        let y_fn = Expr::parse(y_fn)?;
        log::debug!("creating curve x(t) = {x_fn}, y(t) = {y_fn}, t in [{t_min}, {t_max}], {segments} segments");
        Ok(Self { x_fn, y_fn, t_min, t_max, segments, tick_marks: false, style })
    }

    /// Replace `x(t)`. On error the previous function is kept.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError`] if `source` does not parse.
    pub fn set_x_fn(&mut self, source: &str) -> Result<(), ExprError> {
        self.x_fn = Expr::parse(source)?;
        Ok(())
    }

    /// Replace `y(t)`. On error the previous function is kept.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError`] if `source` does not parse.
    pub fn set_y_fn(&mut self, source: &str) -> Result<(), ExprError> {
        self.y_fn = Expr::parse(source)?;
        Ok(())
    }

    /// Point on the curve at parameter `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point {
        Point::new(self.x_fn.eval(t), self.y_fn.eval(t))
    }

    /// `segments + 1` samples from `t_min` to `t_max` inclusive, with the
    /// segment count clamped to `1..=MAX_SEGMENTS`.
    #[must_use]
    pub fn samples(&self) -> Vec<Point> {
        let n = self.segments.clamp(1, MAX_SEGMENTS);
        let step = (self.t_max - self.t_min) / f64::from(n);
        (0..=n)
            .map(|i| self.point_at(step.mul_add(f64::from(i), self.t_min)))
            .collect()
    }

    /// Stroke the polyline (and tick marks, if enabled).
    ///
    /// Non-finite samples split the polyline instead of poisoning the path.
    ///
    /// # Errors
    ///
    /// Propagates surface failures.
    pub fn draw(&self, surface: &mut dyn Surface) -> Result<(), CanvasError> {
        let points = self.samples();

        surface.begin_path();
        let mut pen_down = false;
        for &p in &points {
            if !p.is_finite() {
                pen_down = false;
                continue;
            }
            if pen_down {
                surface.line_to(p);
            } else {
                surface.move_to(p);
                pen_down = true;
            }
        }

        if self.tick_marks {
            for window in points.windows(3) {
                let (prev, at, next) = (window[0], window[1], window[2]);
                let Some(normal) = (next - prev).perpendicular().normalized() else {
                    continue;
                };
                if !at.is_finite() {
                    continue;
                }
                let offset = normal * TICK_HALF_LENGTH;
                surface.move_to(at - offset);
                surface.line_to(at + offset);
            }
        }

        surface.set_line_width(self.style.width);
        surface.set_stroke_color(self.style.color);
        surface.stroke();
        Ok(())
    }

    /// Whether `pos` is on any polyline segment, using the line hit rule.
    #[must_use]
    pub fn is_hit(&self, pos: Point) -> bool {
        let accuracy = self.style.hit_accuracy();
        self.samples()
            .windows(2)
            .any(|w| w[0].is_finite() && w[1].is_finite() && segment_hit(pos, w[0], w[1], accuracy))
    }

    /// Curves are edited through their properties; they have no handles.
    #[must_use]
    pub fn create_draggers(&self) -> Vec<Dragger> {
        Vec::new()
    }
}
