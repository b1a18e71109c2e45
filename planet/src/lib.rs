//! WebGL planet scene graph.
//!
//! A small retained-mode scene graph drawn through a [`backend::Backend`]
//! trait: an earth sphere with day, night, bathymetry and cloud textures, a
//! lat/long grid, an equator ring and a directional sun. Everything above
//! [`webgl`] is plain Rust and is tested against the recording backend.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | `wasm-bindgen` host boundary |
//! | [`scene`] | The planet scene, draw options, joints |
//! | [`node`] | Scene graph nodes and traversal |
//! | [`geometry`] | Meshes, parametric surfaces, tessellation |
//! | [`band`] | Open cylinder band mesh |
//! | [`material`], [`light`] | Phong material and directional light items |
//! | [`camera`] | Fixed perspective camera |
//! | [`animation`], [`input`] | World spin and key bindings |
//! | [`backend`] | Drawing backend trait and a recording implementation |
//! | [`webgl`] | `Backend` over `WebGlRenderingContext` |
//! | [`consts`] | Scene constants |
//! | [`error`] | Crate error type |

pub mod animation;
pub mod app;
pub mod backend;
pub mod band;
pub mod camera;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod input;
pub mod light;
pub mod material;
pub mod node;
pub mod scene;
pub mod webgl;

pub use error::PlanetError;
