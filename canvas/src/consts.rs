//! Shared numeric constants for the canvas crate.

// ── Hit-testing ─────────────────────────────────────────────────

/// Fixed slop added to half the stroke width when hit-testing outlines.
pub const HIT_TOLERANCE: f64 = 2.0;

/// Extra slop around a dragger's drawn radius when grabbing it.
pub const HANDLE_HIT_SLOP: f64 = 2.0;

// ── Shapes ──────────────────────────────────────────────────────

/// Smallest radius a radius-dragger step may produce.
pub const MIN_RADIUS: f64 = 10.0;

/// Stroke width used when a shape is built without a style.
pub const DEFAULT_LINE_WIDTH: f64 = 2.0;

/// Stroke color used when a shape is built without a style (`#0000AA`).
pub const DEFAULT_COLOR: (u8, u8, u8) = (0x00, 0x00, 0xAA);

/// Sample count for a curve built without an explicit segment count.
pub const DEFAULT_SEGMENTS: u32 = 20;

/// Largest segment count a curve may carry; each draw and hit test
/// allocates one sample per segment.
pub const MAX_SEGMENTS: u32 = 4096;

/// Longest curve function source accepted by the parser, in bytes.
pub const MAX_EXPR_LEN: usize = 1024;

/// Deepest nesting of parentheses, signs and powers in a curve function.
pub const MAX_EXPR_DEPTH: usize = 256;

/// Half length of a curve tick mark, measured along the curve normal.
pub const TICK_HALF_LENGTH: f64 = 5.0;

// ── Drag handles ────────────────────────────────────────────────

/// Drawn radius of a circle's center handle.
pub const CENTER_HANDLE_RADIUS: f64 = 4.0;

/// Drawn radius of a circle's radius handle.
pub const RADIUS_HANDLE_RADIUS: f64 = 3.0;

/// Drawn radius of a line endpoint handle.
pub const ENDPOINT_HANDLE_RADIUS: f64 = 4.0;

/// Outline width of hollow handles.
pub const HANDLE_LINE_WIDTH: f64 = 1.0;

// ── Random demo shapes ──────────────────────────────────────────

/// Inset of random points from the canvas border.
pub const RANDOM_POINT_MARGIN: f64 = 5.0;

/// Inset of random circle centers from the top/left border.
pub const RANDOM_CENTER_MARGIN: f64 = 20.0;

/// Distance a random circle keeps from the nearest canvas border.
pub const RANDOM_RADIUS_MARGIN: f64 = 10.0;

/// Amplitude of the random demo curve.
pub const RANDOM_CURVE_AMPLITUDE: f64 = 100.0;

/// Upper parameter bound of the random demo curve (about 2π).
pub const RANDOM_CURVE_T_MAX: f64 = 6.28;

/// Inclusive lower and exclusive upper segment count of random curves.
pub const RANDOM_CURVE_SEGMENTS: (u32, u32) = (5, 30);
