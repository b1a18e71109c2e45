use crate::dragger::Dragger;
use crate::error::CanvasError;
use crate::input::{Button, DragEvent, InputState};
use crate::scene::{ObjectId, Scene};
use crate::shape::Shape;
use crate::surface::Surface;
use crate::vec2::Point;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The selection changed; `None` means nothing is selected.
    SelectionChanged(Option<ObjectId>),
    /// The geometry or style of an object changed.
    ObjectChanged(ObjectId),
    /// The canvas should be redrawn.
    RenderNeeded,
}

type SelectionObserver = Box<dyn FnMut(Option<&Shape>)>;
type ChangeObserver = Box<dyn FnMut(&Shape)>;

/// Selection and pointer-gesture state on top of a [`Scene`].
///
/// At most one shape is selected. Selecting a shape rebuilds its draggers;
/// pointer events either grab one of those draggers or hit-test the scene.
/// Every handler returns the [`Action`]s the host should react to, and the
/// registered observers are called synchronously before the handler returns.
pub struct SceneController {
    scene: Scene,
    selected: Option<ObjectId>,
    draggers: Vec<Dragger>,
    input: InputState,
    selection_observers: Vec<SelectionObserver>,
    change_observers: Vec<ChangeObserver>,
}

impl Default for SceneController {
    fn default() -> Self {
        Self::new(Scene::new())
    }
}

impl SceneController {
    #[must_use]
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            selected: None,
            draggers: Vec::new(),
            input: InputState::Idle,
            selection_observers: Vec::new(),
            change_observers: Vec::new(),
        }
    }

    // --- Scene access ---

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Direct scene access for adding shapes.
    ///
    /// Edits made through this reference do not notify observers or rebuild
    /// draggers; use [`Self::modify_selected`] for the selected shape.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    // --- Observers ---

    /// Register a callback run after every selection change with the newly
    /// selected shape (or `None` after a deselect).
    pub fn on_selection(&mut self, observer: impl FnMut(Option<&Shape>) + 'static) {
        self.selection_observers.push(Box::new(observer));
    }

    /// Register a callback run after the selected shape was mutated by a
    /// drag or a host edit.
    pub fn on_object_change(&mut self, observer: impl FnMut(&Shape) + 'static) {
        self.change_observers.push(Box::new(observer));
    }

    // --- Selection ---

    /// Make `id` the only selected shape and rebuild its draggers.
    ///
    /// Unknown ids are ignored.
    pub fn select(&mut self, id: ObjectId) -> Vec<Action> {
        let Some(shape) = self.scene.get(&id) else {
            log::warn!("select: no object {id}");
            return Vec::new();
        };
        self.draggers = shape.create_draggers();
        self.selected = Some(id);
        self.input = InputState::Idle;
        log::info!("selected {} {id}", shape.kind().as_str());
        self.notify_selection();
        vec![Action::SelectionChanged(Some(id)), Action::RenderNeeded]
    }

    /// Clear the selection and drop its draggers.
    pub fn deselect(&mut self) -> Vec<Action> {
        self.input = InputState::Idle;
        if self.selected.take().is_none() {
            return Vec::new();
        }
        self.draggers.clear();
        log::info!("selection cleared");
        self.notify_selection();
        vec![Action::SelectionChanged(None), Action::RenderNeeded]
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<ObjectId> {
        self.selected
    }

    /// The currently selected shape, if any.
    #[must_use]
    pub fn selected_object(&self) -> Option<&Shape> {
        self.selected.and_then(|id| self.scene.get(&id))
    }

    /// Draggers of the selected shape.
    #[must_use]
    pub fn draggers(&self) -> &[Dragger] {
        &self.draggers
    }

    /// The gesture currently being tracked.
    #[must_use]
    pub fn input(&self) -> InputState {
        self.input
    }

    // --- Host edits ---

    /// Mutate the selected shape in place, rebuild its draggers, and notify
    /// object-change observers. Does nothing without a selection.
    pub fn modify_selected(&mut self, edit: impl FnOnce(&mut Shape)) -> Vec<Action> {
        let Some(id) = self.selected else {
            return Vec::new();
        };
        let Some(shape) = self.scene.get_mut(&id) else {
            return Vec::new();
        };
        edit(shape);
        self.draggers = shape.create_draggers();
        self.notify_object_change(id);
        vec![Action::ObjectChanged(id), Action::RenderNeeded]
    }

    /// Replace the selected shape with `shape` (a property-panel write-back).
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::NonFinite`] or [`CanvasError::NegativeRadius`]
    /// if `shape` fails validation; the scene is left untouched. Without a
    /// selection nothing happens.
    pub fn replace_selected(&mut self, shape: Shape) -> Result<Vec<Action>, CanvasError> {
        shape.validate()?;
        Ok(self.modify_selected(|slot| *slot = shape))
    }

    // --- Input events ---

    /// Pointer pressed at `pos`.
    ///
    /// A press on a dragger of the selected shape starts a drag. Otherwise the
    /// topmost shape under the pointer becomes the selection, or the
    /// selection is cleared when nothing is hit. Only the primary button acts.
    pub fn on_pointer_down(&mut self, pos: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        self.input = InputState::Idle;

        if let Some(shape) = self.selected_object() {
            if let Some(index) = self.draggers.iter().rposition(|d| d.is_hit(shape, pos)) {
                self.input = InputState::DraggingHandle { index, last: pos };
                return Vec::new();
            }
        }

        match self.scene.hit_test(pos) {
            Some(id) if self.selected == Some(id) => Vec::new(),
            Some(id) => self.select(id),
            None => self.deselect(),
        }
    }

    /// Pointer moved to `pos`. While dragging, feeds the dragger's setter with
    /// the absolute position and the delta since the previous event.
    pub fn on_pointer_move(&mut self, pos: Point) -> Vec<Action> {
        let InputState::DraggingHandle { index, last } = self.input else {
            return Vec::new();
        };
        let (Some(id), Some(dragger)) = (self.selected, self.draggers.get(index).copied()) else {
            self.input = InputState::Idle;
            return Vec::new();
        };
        let Some(shape) = self.scene.get_mut(&id) else {
            self.input = InputState::Idle;
            return Vec::new();
        };

        let event = DragEvent::between(last, pos);
        self.input = InputState::DraggingHandle { index, last: pos };
        if !dragger.set(shape, &event) {
            return Vec::new();
        }
        self.notify_object_change(id);
        vec![Action::ObjectChanged(id), Action::RenderNeeded]
    }

    /// Pointer released: ends any drag.
    pub fn on_pointer_up(&mut self, _pos: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        self.end_gesture()
    }

    /// Pointer capture lost: ends any drag without further mutation.
    pub fn on_pointer_cancel(&mut self) -> Vec<Action> {
        self.end_gesture()
    }

    // --- Render ---

    /// Clear the surface, draw the scene, then the selection's draggers.
    ///
    /// # Errors
    ///
    /// Propagates surface failures.
    pub fn draw(&self, surface: &mut dyn Surface) -> Result<(), CanvasError> {
        surface.clear();
        self.scene.draw(surface)?;
        if let Some(shape) = self.selected_object() {
            for dragger in &self.draggers {
                dragger.draw(shape, surface)?;
            }
        }
        Ok(())
    }

    // --- Internals ---

    fn end_gesture(&mut self) -> Vec<Action> {
        let was_dragging = self.input.is_dragging();
        self.input = InputState::Idle;
        if was_dragging { vec![Action::RenderNeeded] } else { Vec::new() }
    }

    fn notify_selection(&mut self) {
        let shape = self.selected.and_then(|id| self.scene.get(&id));
        for observer in &mut self.selection_observers {
            observer(shape);
        }
    }

    fn notify_object_change(&mut self, id: ObjectId) {
        let Some(shape) = self.scene.get(&id) else {
            return;
        };
        for observer in &mut self.change_observers {
            observer(shape);
        }
    }
}
