//! The planet scene: an earth sphere, a lat/long grid, an equator ring and a
//! sun, viewed by a fixed camera.
//!
//! Node layout under `world` (program `blue`):
//!
//! | Node | Program | Items |
//! |------|---------|-------|
//! | `SunNode` | phong | directional light writing to planet + phong |
//! | `EquatorNode` | phong | reddish material, torus |
//! | `PlanetNode` | planet | reddish material, sphere |
//! | `GridNode` | blue | wireframe sphere |
//!
//! The planet, grid and ring are modelled with their poles on Z and turned
//! a quarter about X so the poles point up.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::f32::consts::FRAC_PI_2;
use std::fmt;
use std::str::FromStr;

use glam::{Mat4, Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::backend::{Backend, ProgramId, TextureId, Uniform};
use crate::camera::Camera;
use crate::consts::{AMBIENT_LIGHT, BLUE, CLEAR_COLOR, GRID_SEGMENTS, RING_RADIUS, RING_SEGMENTS, RING_TUBE, SUN_DIRECTION};
use crate::error::PlanetError;
use crate::geometry::{Sphere, SurfaceConfig, Torus, tessellate};
use crate::light::DirectionalLight;
use crate::material::PhongMaterial;
use crate::node::{MeshItem, NodeItem, SceneNode};

pub const WORLD_NODE: &str = "world";
pub const SUN_NODE: &str = "SunNode";
pub const RING_NODE: &str = "EquatorNode";
pub const PLANET_NODE: &str = "PlanetNode";
pub const GRID_NODE: &str = "GridNode";

/// Shader sources supplied by the host page, keyed by shader name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShaderSources {
    pub minimal_vs: String,
    pub frag_color_fs: String,
    pub phong_vs: String,
    pub phong_fs: String,
    pub planet_vs: String,
    pub planet_fs: String,
}

/// The three programs of the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Programs {
    /// Flat blue.
    pub blue: ProgramId,
    /// Phong lighting.
    pub phong: ProgramId,
    /// Phong lighting plus the earth textures.
    pub planet: ProgramId,
}

impl Programs {
    #[must_use]
    pub fn all(&self) -> [ProgramId; 3] {
        [self.blue, self.phong, self.planet]
    }
}

/// On/off switches shown as check boxes by the host.
///
/// Serialized with the display labels as keys, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawOptions {
    #[serde(rename = "Planet")]
    pub planet: bool,
    #[serde(rename = "Grid")]
    pub grid: bool,
    #[serde(rename = "Ring")]
    pub ring: bool,
    #[serde(rename = "Night Lights")]
    pub night_lights: bool,
    #[serde(rename = "Clouds")]
    pub clouds: bool,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self { planet: true, grid: false, ring: true, night_lights: true, clouds: false }
    }
}

impl DrawOptions {
    pub const LABELS: [&'static str; 5] = ["Planet", "Grid", "Ring", "Night Lights", "Clouds"];

    fn slot(&mut self, label: &str) -> Option<&mut bool> {
        match label {
            "Planet" => Some(&mut self.planet),
            "Grid" => Some(&mut self.grid),
            "Ring" => Some(&mut self.ring),
            "Night Lights" => Some(&mut self.night_lights),
            "Clouds" => Some(&mut self.clouds),
            _ => None,
        }
    }

    /// Switch the option shown as `label`.
    ///
    /// # Errors
    ///
    /// Returns [`PlanetError::UnknownDrawOption`] for any other label.
    pub fn set(&mut self, label: &str, on: bool) -> Result<(), PlanetError> {
        let slot = self.slot(label).ok_or_else(|| PlanetError::UnknownDrawOption(label.to_owned()))?;
        *slot = on;
        Ok(())
    }

    /// Label and value pairs in display order.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, bool); 5] {
        let [planet, grid, ring, night, clouds] = Self::LABELS;
        [
            (planet, self.planet),
            (grid, self.grid),
            (ring, self.ring),
            (night, self.night_lights),
            (clouds, self.clouds),
        ]
    }
}

/// A rotatable joint of the scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Joint {
    /// The whole world about its X axis.
    WorldX,
    /// The whole world about its Y axis.
    WorldY,
}

impl Joint {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WorldX => "worldX",
            Self::WorldY => "worldY",
        }
    }

    fn axis(self) -> Vec3 {
        match self {
            Self::WorldX => Vec3::X,
            Self::WorldY => Vec3::Y,
        }
    }
}

impl fmt::Display for Joint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Joint {
    type Err = PlanetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "worldX" => Ok(Self::WorldX),
            "worldY" => Ok(Self::WorldY),
            _ => Err(PlanetError::UnknownJoint(s.to_owned())),
        }
    }
}

/// The four earth textures, bound once all images have loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanetTextures {
    pub day: TextureId,
    pub night: TextureId,
    pub bathymetry: TextureId,
    pub clouds: TextureId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlanetScene {
    programs: Programs,
    world: SceneNode,
    pub camera: Camera,
    pub draw_options: DrawOptions,
}

impl PlanetScene {
    /// Create the programs, upload the meshes and build the node tree.
    ///
    /// # Errors
    ///
    /// Propagates shader and upload failures from the backend.
    pub fn new(backend: &mut dyn Backend, shaders: &ShaderSources, aspect: f32) -> Result<Self, PlanetError> {
        let programs = Programs {
            blue: backend.create_program(&shaders.minimal_vs, &shaders.frag_color_fs)?,
            phong: backend.create_program(&shaders.phong_vs, &shaders.phong_fs)?,
            planet: backend.create_program(&shaders.planet_vs, &shaders.planet_fs)?,
        };
        let ambient = Uniform::Vec3(Vec3::from_array(AMBIENT_LIGHT));
        let blue = Uniform::Vec4(Vec4::from_array(BLUE));
        backend.set_uniform(programs.blue, "fragColor", blue)?;
        backend.set_uniform(programs.phong, "ambientLight", ambient)?;
        backend.set_uniform(programs.planet, "fragColor", blue)?;
        backend.set_uniform(programs.planet, "ambientLight", ambient)?;

        let sun = DirectionalLight {
            direction: Vec3::from_array(SUN_DIRECTION),
            color: Vec3::ONE,
            programs: vec![programs.planet, programs.phong],
        };
        let sun_node = SceneNode::new(SUN_NODE, vec![NodeItem::Light(sun)], Some(programs.phong));

        let ring_config = SurfaceConfig::new(RING_SEGMENTS.0, RING_SEGMENTS.1);
        let torus = tessellate(&Torus { radius: RING_RADIUS, tube: RING_TUBE }, &ring_config)?;
        let ring_node = SceneNode::new(
            RING_NODE,
            vec![
                NodeItem::Material(PhongMaterial::reddish(80.0)),
                NodeItem::Mesh(MeshItem::surface(backend.upload_mesh(&torus)?, &ring_config)),
            ],
            Some(programs.phong),
        );

        let planet_config = SurfaceConfig::default();
        let sphere = tessellate(&Sphere { radius: 1.0 }, &planet_config)?;
        let planet_node = SceneNode::new(
            PLANET_NODE,
            vec![
                NodeItem::Material(PhongMaterial::reddish(50.0)),
                NodeItem::Mesh(MeshItem::surface(backend.upload_mesh(&sphere)?, &planet_config)),
            ],
            Some(programs.planet),
        );

        let grid_config = SurfaceConfig::new(GRID_SEGMENTS.0, GRID_SEGMENTS.1).wireframe();
        let grid = tessellate(&Sphere { radius: 1.0 }, &grid_config)?;
        let grid_node = SceneNode::new(
            GRID_NODE,
            vec![NodeItem::Mesh(MeshItem::surface(backend.upload_mesh(&grid)?, &grid_config))],
            Some(programs.blue),
        );

        let upright = Mat4::from_rotation_x(FRAC_PI_2);
        let mut children = Vec::new();
        for mut node in [sun_node, ring_node, planet_node, grid_node] {
            if node.name != SUN_NODE {
                node.transformation *= upright;
            }
            children.push(NodeItem::Node(node));
        }
        let world = SceneNode::new(WORLD_NODE, children, Some(programs.blue));

        log::info!("planet scene ready");
        Ok(Self { programs, world, camera: Camera::new(aspect), draw_options: DrawOptions::default() })
    }

    #[must_use]
    pub fn programs(&self) -> Programs {
        self.programs
    }

    #[must_use]
    pub fn world(&self) -> &SceneNode {
        &self.world
    }

    /// Apply the draw options and draw one frame.
    ///
    /// # Errors
    ///
    /// Propagates backend failures.
    pub fn draw(&mut self, backend: &mut dyn Backend) -> Result<(), PlanetError> {
        let options = self.draw_options;
        for (name, visible) in [(RING_NODE, options.ring), (PLANET_NODE, options.planet), (GRID_NODE, options.grid)] {
            if let Some(node) = self.world.find_mut(name) {
                node.visible = visible;
            }
        }

        let planet = self.programs.planet;
        backend.set_uniform(planet, "nightLights", Uniform::Bool(options.night_lights))?;
        backend.set_uniform(planet, "clouds", Uniform::Bool(options.clouds))?;
        for program in self.programs.all() {
            backend.set_uniform(program, "projectionMatrix", Uniform::Mat4(self.camera.projection))?;
        }

        backend.begin_frame(Vec4::from_array(CLEAR_COLOR));
        self.world.draw(backend, None, self.camera.view)
    }

    /// Bind the earth textures to units 0 through 3 of the planet program.
    ///
    /// # Errors
    ///
    /// Propagates backend failures.
    pub fn set_textures(&self, backend: &mut dyn Backend, textures: &PlanetTextures) -> Result<(), PlanetError> {
        let planet = self.programs.planet;
        backend.bind_texture(planet, "daylightTexture", 0, textures.day)?;
        backend.bind_texture(planet, "nightlightTexture", 1, textures.night)?;
        backend.bind_texture(planet, "bathymetryTexture", 2, textures.bathymetry)?;
        backend.bind_texture(planet, "cloudsTexture", 3, textures.clouds)
    }

    /// Turn `joint` by `degrees` about its own axis.
    pub fn rotate_joint(&mut self, joint: Joint, degrees: f32) {
        let rotation = Mat4::from_axis_angle(joint.axis(), degrees.to_radians());
        self.world.transformation *= rotation;
        log::debug!("rotated {joint} by {degrees} degrees");
    }
}
