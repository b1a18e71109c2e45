//! Randomized shapes for the "new line / circle / curve" demo buttons.
//!
//! Every coordinate is snapped to whole pixels and kept inside the canvas
//! with a small margin, so freshly added shapes are always clickable.

#[cfg(test)]
#[path = "random_test.rs"]
mod random_test;

use rand::Rng;

use crate::circle::Circle;
use crate::consts::{
    MIN_RADIUS, RANDOM_CENTER_MARGIN, RANDOM_CURVE_AMPLITUDE, RANDOM_CURVE_SEGMENTS, RANDOM_CURVE_T_MAX,
    RANDOM_POINT_MARGIN, RANDOM_RADIUS_MARGIN,
};
use crate::curve::ParametricCurve;
use crate::error::CanvasError;
use crate::line::Line;
use crate::style::{Color, Style};
use crate::vec2::Point;

/// Builds random shapes that fit a `width` x `height` canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeFactory {
    pub width: f64,
    pub height: f64,
}

impl ShapeFactory {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Color whose channels are multiples of ten in `0..=250`.
    pub fn color<R: Rng + ?Sized>(rng: &mut R) -> Color {
        let mut channel = || {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let v = ((rng.random::<f64>() * 25.9).floor() * 10.0) as u8;
            v
        };
        Color::rgb(channel(), channel(), channel())
    }

    /// Random color with a stroke width of 1, 2 or 3.
    pub fn style<R: Rng + ?Sized>(rng: &mut R) -> Style {
        let color = Self::color(rng);
        let width = (rng.random::<f64>() * 3.0).floor() + 1.0;
        Style::new(width, color)
    }

    /// Point at least [`RANDOM_POINT_MARGIN`] away from each edge.
    pub fn point<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        let inset = 2.0 * RANDOM_POINT_MARGIN;
        Point::new(
            snap(rng, self.width - inset, RANDOM_POINT_MARGIN),
            snap(rng, self.height - inset, RANDOM_POINT_MARGIN),
        )
    }

    pub fn line<R: Rng + ?Sized>(&self, rng: &mut R) -> Line {
        let start = self.point(rng);
        let end = self.point(rng);
        Line::new(start, end, Self::style(rng))
    }

    /// Circle that stays inside the canvas with a margin of
    /// [`RANDOM_RADIUS_MARGIN`]; never smaller than [`MIN_RADIUS`].
    pub fn circle<R: Rng + ?Sized>(&self, rng: &mut R) -> Circle {
        let inset = RANDOM_CENTER_MARGIN + RANDOM_RADIUS_MARGIN;
        let center = Point::new(
            snap(rng, self.width - inset, RANDOM_CENTER_MARGIN),
            snap(rng, self.height - inset, RANDOM_CENTER_MARGIN),
        );
        let r_max = center.x.min(center.y).min(self.width - center.x).min(self.height - center.y) - RANDOM_RADIUS_MARGIN;
        let radius = if r_max > 0.0 { (rng.random::<f64>() * r_max).floor() + MIN_RADIUS } else { MIN_RADIUS };
        Circle::new(center, radius, Self::style(rng))
    }

    /// Closed loop of amplitude [`RANDOM_CURVE_AMPLITUDE`] around a random
    /// point, as a pair of expressions in `t`.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Expression`] if the generated functions fail
    /// to parse.
    pub fn curve<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<ParametricCurve, CanvasError> {
        let origin = self.point(rng);
        let (lo, hi) = RANDOM_CURVE_SEGMENTS;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let segments = (rng.random::<f64>() * f64::from(hi - lo)).floor() as u32 + lo;
        let x_fn = format!("{}+{RANDOM_CURVE_AMPLITUDE}*sin(t)", origin.x);
        let y_fn = format!("{}+{RANDOM_CURVE_AMPLITUDE}*cos(t)", origin.y);
        let curve = ParametricCurve::new(&x_fn, &y_fn, 0.0, RANDOM_CURVE_T_MAX, segments, Self::style(rng))?;
        Ok(curve)
    }
}

/// Whole-pixel coordinate in `[offset, offset + span)`.
fn snap<R: Rng + ?Sized>(rng: &mut R, span: f64, offset: f64) -> f64 {
    (rng.random::<f64>() * span).floor() + offset
}
