//! Scene model: the ordered shape store and draw orchestration.
//!
//! The scene owns every shape. Insertion order is z-order: shapes are drawn
//! first to last, and hit-tested last to first so the topmost shape wins.
//! Shapes are addressed by an [`ObjectId`] assigned on insertion, which is
//! what the controller and the draggers hold on to.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use uuid::Uuid;

use crate::error::CanvasError;
use crate::shape::Shape;
use crate::surface::Surface;
use crate::vec2::Point;

/// Unique identifier for a shape in the scene.
pub type ObjectId = Uuid;

/// A shape together with its id.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub id: ObjectId,
    pub shape: Shape,
}

/// Ordered collection of shapes.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self { objects: Vec::new() }
    }

    /// Append one shape on top of the existing ones and return its id.
    pub fn add(&mut self, shape: Shape) -> ObjectId {
        let id = Uuid::new_v4();
        log::debug!("adding {} {id}", shape.kind().as_str());
        self.objects.push(SceneObject { id, shape });
        id
    }

    /// Append shapes in the given order, returning their ids in that order.
    /// Existing shapes keep their positions.
    pub fn add_objects(&mut self, shapes: Vec<Shape>) -> Vec<ObjectId> {
        shapes.into_iter().map(|shape| self.add(shape)).collect()
    }

    /// Return a reference to a shape by id.
    #[must_use]
    pub fn get(&self, id: &ObjectId) -> Option<&Shape> {
        self.objects.iter().find(|o| o.id == *id).map(|o| &o.shape)
    }

    /// Return a mutable reference to a shape by id.
    pub fn get_mut(&mut self, id: &ObjectId) -> Option<&mut Shape> {
        self.objects.iter_mut().find(|o| o.id == *id).map(|o| &mut o.shape)
    }

    /// Replace the shape stored under `id`, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::UnknownObject`] if no shape has this id.
    pub fn replace(&mut self, id: &ObjectId, shape: Shape) -> Result<Shape, CanvasError> {
        let slot = self.get_mut(id).ok_or(CanvasError::UnknownObject(*id))?;
        Ok(std::mem::replace(slot, shape))
    }

    /// All objects in draw order (bottom first).
    #[must_use]
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Number of shapes currently in the scene.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if the scene contains no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Draw all shapes in insertion order.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first surface failure.
    pub fn draw(&self, surface: &mut dyn Surface) -> Result<(), CanvasError> {
        for obj in &self.objects {
            obj.shape.draw(surface)?;
        }
        Ok(())
    }

    /// The topmost shape whose outline is hit by `pos`.
    #[must_use]
    pub fn hit_test(&self, pos: Point) -> Option<ObjectId> {
        self.objects.iter().rev().find(|o| o.shape.is_hit(pos)).map(|o| o.id)
    }
}
