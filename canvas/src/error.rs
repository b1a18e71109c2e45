//! Error type for the canvas crate.

use crate::consts::MAX_SEGMENTS;
use crate::expr::ExprError;
use crate::scene::ObjectId;

/// Errors produced by shape construction, host edits, and rendering.
#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    /// A color string was not of the form `#rrggbb` or `#rgb`.
    #[error("invalid color: {0:?}")]
    InvalidColor(String),
    /// A curve function could not be parsed.
    #[error("invalid curve function: {0}")]
    Expression(#[from] ExprError),
    /// The drawing surface rejected a call.
    #[error("render failed: {0}")]
    Render(String),
    /// No object with this id exists in the scene.
    #[error("unknown object: {0}")]
    UnknownObject(ObjectId),
    /// A host edit carried a NaN or infinite value in the named field.
    #[error("non-finite value for {0}")]
    NonFinite(&'static str),
    /// A host edit tried to give a circle a negative radius.
    #[error("negative radius {0}")]
    NegativeRadius(f64),
    /// A host edit gave a shape a zero or negative stroke width.
    #[error("stroke width must be positive, got {0}")]
    NonPositiveWidth(f64),
    /// A host edit gave a curve more segments than it may sample.
    #[error("curve has {0} segments, at most {max} allowed", max = MAX_SEGMENTS)]
    TooManySegments(u32),
    /// A host edit was not valid shape JSON.
    #[error("invalid shape json: {0}")]
    Json(#[from] serde_json::Error),
}
