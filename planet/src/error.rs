//! Error type for the planet crate.

use crate::backend::{MeshId, ProgramId, TextureId};

/// Errors produced while building or drawing the planet scene.
#[derive(Debug, thiserror::Error)]
pub enum PlanetError {
    /// A draw option label that the scene does not offer.
    #[error("unknown draw option: {0:?}")]
    UnknownDrawOption(String),
    /// A joint name that the scene does not offer.
    #[error("unknown joint: {0:?}")]
    UnknownJoint(String),
    /// A program handle that the backend never created.
    #[error("unknown program {0:?}")]
    UnknownProgram(ProgramId),
    #[error("unknown mesh {0:?}")]
    UnknownMesh(MeshId),
    #[error("unknown texture {0:?}")]
    UnknownTexture(TextureId),
    /// A tessellation with more vertices than 16-bit indices can address.
    #[error("mesh has {0} vertices, more than u16 indices can address")]
    MeshTooLarge(usize),
    /// Shader compilation or program linking failed.
    #[error("shader error: {0}")]
    Shader(String),
    /// The WebGL context rejected a call.
    #[error("webgl error: {0}")]
    WebGl(String),
    /// Host-supplied JSON was malformed.
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}
