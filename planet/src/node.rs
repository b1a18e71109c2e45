//! Scene graph nodes.
//!
//! A [`SceneNode`] holds a local transformation, an optional program and an
//! ordered list of items. Drawing walks the tree depth first, concatenating
//! transformations and inheriting the program from the nearest ancestor
//! that sets one. Items are applied in order, so a material placed before a
//! mesh in the same node is the one that mesh is drawn with.

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;

use glam::{Mat3, Mat4};

use crate::backend::{Backend, DrawMode, MeshId, ProgramId, Uniform};
use crate::band::BandConfig;
use crate::error::PlanetError;
use crate::geometry::SurfaceConfig;
use crate::light::DirectionalLight;
use crate::material::PhongMaterial;

/// An uploaded mesh and which of its index lists to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshItem {
    pub mesh: MeshId,
    pub filled: bool,
    pub wireframe: bool,
}

impl MeshItem {
    /// A tessellated surface: either filled or, with `wireframe`, lines only.
    #[must_use]
    pub fn surface(mesh: MeshId, config: &SurfaceConfig) -> Self {
        Self { mesh, filled: !config.wireframe, wireframe: config.wireframe }
    }

    /// A band: fill and outline are chosen independently.
    #[must_use]
    pub fn band(mesh: MeshId, config: &BandConfig) -> Self {
        Self { mesh, filled: config.filled, wireframe: config.as_wireframe }
    }

    fn draw(self, backend: &mut dyn Backend, program: ProgramId) -> Result<(), PlanetError> {
        if self.filled {
            backend.draw_mesh(program, self.mesh, DrawMode::Triangles)?;
        }
        if self.wireframe {
            backend.draw_mesh(program, self.mesh, DrawMode::Lines)?;
        }
        Ok(())
    }
}

/// Something a node can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeItem {
    Node(SceneNode),
    Light(DirectionalLight),
    Material(PhongMaterial),
    Mesh(MeshItem),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub name: String,
    pub transformation: Mat4,
    pub visible: bool,
    /// Program for this subtree; `None` inherits the parent's.
    pub program: Option<ProgramId>,
    pub items: Vec<NodeItem>,
}

impl SceneNode {
    #[must_use]
    pub fn new(name: &str, items: Vec<NodeItem>, program: Option<ProgramId>) -> Self {
        Self { name: name.to_owned(), transformation: Mat4::IDENTITY, visible: true, program, items }
    }

    /// Draw this subtree.
    ///
    /// Sets `modelViewMatrix` and `normalMatrix` on the effective program
    /// before the items are applied. Invisible nodes draw nothing, and
    /// neither do nodes without a program of their own or inherited.
    ///
    /// # Errors
    ///
    /// Propagates backend failures.
    pub fn draw(
        &self,
        backend: &mut dyn Backend,
        parent_program: Option<ProgramId>,
        parent_model_view: Mat4,
    ) -> Result<(), PlanetError> {
        if !self.visible {
            return Ok(());
        }
        let Some(program) = self.program.or(parent_program) else {
            log::warn!("node {:?} has no program, skipping", self.name);
            return Ok(());
        };

        let model_view = parent_model_view * self.transformation;
        backend.set_uniform(program, "modelViewMatrix", Uniform::Mat4(model_view))?;
        backend.set_uniform(program, "normalMatrix", Uniform::Mat3(normal_matrix(model_view)))?;

        for item in &self.items {
            match item {
                NodeItem::Node(child) => child.draw(backend, Some(program), model_view)?,
                NodeItem::Light(light) => light.apply(backend, model_view)?,
                NodeItem::Material(material) => material.apply(backend, program)?,
                NodeItem::Mesh(mesh) => mesh.draw(backend, program)?,
            }
        }
        Ok(())
    }

    /// Depth-first search for a node named `name`, this node included.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut SceneNode> {
        if self.name == name {
            return Some(self);
        }
        self.items.iter_mut().find_map(|item| match item {
            NodeItem::Node(child) => child.find_mut(name),
            _ => None,
        })
    }

    /// Read-only counterpart of [`Self::find_mut`].
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&SceneNode> {
        if self.name == name {
            return Some(self);
        }
        self.items.iter().find_map(|item| match item {
            NodeItem::Node(child) => child.find(name),
            _ => None,
        })
    }
}

/// Inverse transpose of the upper-left 3x3 block of `model_view`.
///
/// A singular block (a zero scale) yields the zero matrix rather than
/// non-finite values.
#[must_use]
pub fn normal_matrix(model_view: Mat4) -> Mat3 {
    let m = Mat3::from_mat4(model_view);
    if m.determinant().is_normal() { m.inverse().transpose() } else { Mat3::ZERO }
}
