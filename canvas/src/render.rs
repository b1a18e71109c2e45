//! Browser rendering: [`Surface`] over a [`CanvasRenderingContext2d`].
//!
//! This module is the only place that touches the 2D context. Shapes and
//! draggers describe themselves through the [`Surface`] calls; this type
//! forwards them and turns `JsValue` failures into [`CanvasError::Render`].

use web_sys::CanvasRenderingContext2d;

use crate::error::CanvasError;
use crate::style::Color;
use crate::surface::Surface;
use crate::vec2::Point;

/// A 2D canvas context plus the pixel size cleared on [`Surface::clear`].
pub struct WebSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl WebSurface {
    #[must_use]
    pub fn new(ctx: CanvasRenderingContext2d, width: f64, height: f64) -> Self {
        Self { ctx, width, height }
    }

    /// Track a resized canvas.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }
}

impl Surface for WebSurface {
    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, p: Point) {
        self.ctx.move_to(p.x, p.y);
    }

    fn line_to(&mut self, p: Point) {
        self.ctx.line_to(p.x, p.y);
    }

    fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64) -> Result<(), CanvasError> {
        self.ctx
            .arc(center.x, center.y, radius, start, end)
            .map_err(|e| CanvasError::Render(format!("arc at ({}, {}) r={radius}: {e:?}", center.x, center.y)))
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.ctx.set_stroke_style_str(&color.to_hex());
    }

    fn set_fill_color(&mut self, color: Color) {
        self.ctx.set_fill_style_str(&color.to_hex());
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }
}
