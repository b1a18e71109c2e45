//! Interactive 2D shape canvas.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! shape model (circles, lines, parametric curves), their hit-testing and
//! drag handles, the ordered scene, and the selection controller that turns
//! pointer events into shape mutations. The host JavaScript layer only wires
//! DOM buttons and pointer events to [`engine::Engine`] and shows property
//! panels in response to the observers it registers.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | `wasm-bindgen` host boundary |
//! | [`controller`] | Selection, dragger lifecycle, pointer dispatch |
//! | [`scene`] | Ordered shape store and draw orchestration |
//! | [`shape`] | Tagged shape enum dispatching to the concrete shapes |
//! | [`circle`], [`line`], [`curve`] | Concrete shapes |
//! | [`dragger`] | Draggable control points bound to shape fields |
//! | [`input`] | Pointer buttons, drag events, gesture state |
//! | [`surface`] | Drawing surface capability and an in-memory recorder |
//! | [`render`] | `Surface` over the browser `CanvasRenderingContext2d` |
//! | [`random`] | Randomized shapes for the demo buttons |
//! | [`expr`] | Parser for curve functions of `t` |
//! | [`style`] | Stroke width and color |
//! | [`vec2`] | 2D point arithmetic |
//! | [`consts`] | Shared numeric constants (tolerances, handle sizes, defaults) |
//! | [`error`] | Crate error type |

pub mod circle;
pub mod consts;
pub mod controller;
pub mod curve;
pub mod dragger;
pub mod engine;
pub mod error;
pub mod expr;
pub mod input;
pub mod line;
pub mod random;
pub mod render;
pub mod scene;
pub mod shape;
pub mod style;
pub mod surface;
pub mod vec2;

pub use error::CanvasError;
