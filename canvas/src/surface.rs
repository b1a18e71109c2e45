//! Drawing surface capability consumed by shapes, draggers, and the scene.
//!
//! Shapes never talk to the browser directly; they draw through [`Surface`].
//! [`crate::render::WebSurface`] forwards to a `CanvasRenderingContext2d`,
//! and [`RecordingSurface`] keeps the calls in memory so drawing can be
//! inspected without a browser.

use crate::error::CanvasError;
use crate::style::Color;
use crate::vec2::Point;

/// Path-based 2D drawing primitives in the style of Canvas2D.
pub trait Surface {
    /// Start a new path, discarding the current one.
    fn begin_path(&mut self);

    fn move_to(&mut self, p: Point);

    fn line_to(&mut self, p: Point);

    /// Add a circular arc around `center` from `start` to `end` radians.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Render`] if the backend rejects the arc
    /// (for example a negative radius).
    fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64) -> Result<(), CanvasError>;

    fn close_path(&mut self);

    fn set_line_width(&mut self, width: f64);

    fn set_stroke_color(&mut self, color: Color);

    fn set_fill_color(&mut self, color: Color);

    /// Stroke the current path with the current line width and stroke color.
    fn stroke(&mut self);

    /// Fill the current path with the current fill color.
    fn fill(&mut self);

    /// Erase the whole surface.
    fn clear(&mut self);
}

/// One recorded [`Surface`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    Arc { center: Point, radius: f64, start: f64, end: f64 },
    ClosePath,
    LineWidth(f64),
    StrokeColor(Color),
    FillColor(Color),
    Stroke,
    Fill,
    Clear,
}

/// A [`Surface`] that appends every call to a list.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `stroke` calls recorded so far.
    #[must_use]
    pub fn stroke_count(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Stroke)).count()
    }

    /// Stroke colors in the order they were set.
    #[must_use]
    pub fn stroke_colors(&self) -> Vec<Color> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::StrokeColor(c) => Some(*c),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn begin_path(&mut self) {
        self.ops.push(DrawOp::BeginPath);
    }

    fn move_to(&mut self, p: Point) {
        self.ops.push(DrawOp::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        self.ops.push(DrawOp::LineTo(p));
    }

    fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64) -> Result<(), CanvasError> {
        if radius < 0.0 {
            return Err(CanvasError::Render(format!("negative arc radius {radius}")));
        }
        self.ops.push(DrawOp::Arc { center, radius, start, end });
        Ok(())
    }

    fn close_path(&mut self) {
        self.ops.push(DrawOp::ClosePath);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(DrawOp::LineWidth(width));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.ops.push(DrawOp::StrokeColor(color));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.ops.push(DrawOp::FillColor(color));
    }

    fn stroke(&mut self) {
        self.ops.push(DrawOp::Stroke);
    }

    fn fill(&mut self) {
        self.ops.push(DrawOp::Fill);
    }

    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }
}
