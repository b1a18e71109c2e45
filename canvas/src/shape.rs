//! The tagged shape type stored in the scene.
//!
//! Glue code never inspects concrete shape types at runtime; it calls the
//! dispatching methods here, and reads [`Shape::kind`] when it needs to pick a
//! property panel. The serde form (`{"kind": "circle", ...}`) is the exchange
//! format for those panels.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use serde::{Deserialize, Serialize};

use crate::circle::Circle;
use crate::consts::MAX_SEGMENTS;
use crate::curve::ParametricCurve;
use crate::dragger::Dragger;
use crate::error::CanvasError;
use crate::line::Line;
use crate::style::Style;
use crate::surface::Surface;
use crate::vec2::Point;

/// Discriminant of a [`Shape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Line,
    Curve,
}

impl ShapeKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Line => "line",
            Self::Curve => "curve",
        }
    }
}

/// Any drawable, hit-testable shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Circle(Circle),
    Line(Line),
    Curve(ParametricCurve),
}

impl Shape {
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Circle(_) => ShapeKind::Circle,
            Self::Line(_) => ShapeKind::Line,
            Self::Curve(_) => ShapeKind::Curve,
        }
    }

    /// Draw the shape outline.
    ///
    /// # Errors
    ///
    /// Propagates surface failures.
    pub fn draw(&self, surface: &mut dyn Surface) -> Result<(), CanvasError> {
        match self {
            Self::Circle(c) => c.draw(surface),
            Self::Line(l) => l.draw(surface),
            Self::Curve(c) => c.draw(surface),
        }
    }

    #[must_use]
    pub fn is_hit(&self, pos: Point) -> bool {
        match self {
            Self::Circle(c) => c.is_hit(pos),
            Self::Line(l) => l.is_hit(pos),
            Self::Curve(c) => c.is_hit(pos),
        }
    }

    #[must_use]
    pub fn create_draggers(&self) -> Vec<Dragger> {
        match self {
            Self::Circle(c) => c.create_draggers(),
            Self::Line(l) => l.create_draggers(),
            Self::Curve(c) => c.create_draggers(),
        }
    }

    #[must_use]
    pub fn style(&self) -> &Style {
        match self {
            Self::Circle(c) => &c.style,
            Self::Line(l) => &l.style,
            Self::Curve(c) => &c.style,
        }
    }

    pub fn style_mut(&mut self) -> &mut Style {
        match self {
            Self::Circle(c) => &mut c.style,
            Self::Line(l) => &mut l.style,
            Self::Curve(c) => &mut c.style,
        }
    }

    /// Check that every numeric field a host edit can reach is finite and in
    /// range.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::NonFinite`] naming the first offending field,
    /// [`CanvasError::NonPositiveWidth`] for a zero or negative stroke width,
    /// [`CanvasError::NegativeRadius`] for a circle with a negative radius, or
    /// [`CanvasError::TooManySegments`] for a curve above [`MAX_SEGMENTS`].
    pub fn validate(&self) -> Result<(), CanvasError> {
        let finite = |v: f64, field: &'static str| {
            if v.is_finite() { Ok(()) } else { Err(CanvasError::NonFinite(field)) }
        };
        let width = self.style().width;
        finite(width, "width")?;
        if width <= 0.0 {
            return Err(CanvasError::NonPositiveWidth(width));
        }
        match self {
            Self::Circle(c) => {
                finite(c.center.x, "center.x")?;
                finite(c.center.y, "center.y")?;
                finite(c.radius, "radius")?;
                if c.radius < 0.0 {
                    return Err(CanvasError::NegativeRadius(c.radius));
                }
                Ok(())
            }
            Self::Line(l) => {
                finite(l.start.x, "start.x")?;
                finite(l.start.y, "start.y")?;
                finite(l.end.x, "end.x")?;
                finite(l.end.y, "end.y")
            }
            Self::Curve(c) => {
                finite(c.t_min, "t_min")?;
                finite(c.t_max, "t_max")?;
                if c.segments > MAX_SEGMENTS {
                    return Err(CanvasError::TooManySegments(c.segments));
                }
                Ok(())
            }
        }
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Self::Circle(c)
    }
}

impl From<Line> for Shape {
    fn from(l: Line) -> Self {
        Self::Line(l)
    }
}

impl From<ParametricCurve> for Shape {
    fn from(c: ParametricCurve) -> Self {
        Self::Curve(c)
    }
}
