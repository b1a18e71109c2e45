//! Shared constants for the planet scene.

// ── Camera ──────────────────────────────────────────────────────

/// Eye position of the initial camera, looking at the origin with +Y up.
pub const CAMERA_EYE: [f32; 3] = [0.0, 0.5, 3.0];

/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEG: f32 = 45.0;

pub const CAMERA_NEAR: f32 = 0.01;
pub const CAMERA_FAR: f32 = 100.0;

// ── Lighting ────────────────────────────────────────────────────

/// Ambient light set on the phong and planet programs.
pub const AMBIENT_LIGHT: [f32; 3] = [0.4, 0.4, 0.4];

/// World-space direction of the sun.
pub const SUN_DIRECTION: [f32; 3] = [-1.0, 0.0, 0.0];

/// Flat color of the `blue` program.
pub const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

/// Frame clear color (white).
pub const CLEAR_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── Geometry ────────────────────────────────────────────────────

/// Equator ring: torus major radius, tube radius, and tessellation.
pub const RING_RADIUS: f32 = 1.2;
pub const RING_TUBE: f32 = 0.04;
pub const RING_SEGMENTS: (u16, u16) = (80, 40);

/// Grid: wireframe sphere tessellation.
pub const GRID_SEGMENTS: (u16, u16) = (80, 40);

/// Segment count used by a surface config that does not specify one.
pub const DEFAULT_SURFACE_SEGMENTS: u16 = 20;

// ── Interaction ─────────────────────────────────────────────────

/// Rotation applied per key press, in degrees.
pub const KEY_ROTATION_STEP_DEG: f32 = 5.0;

/// Default animation speed in degrees per second.
pub const DEFAULT_ANIMATION_SPEED: f32 = 20.0;
