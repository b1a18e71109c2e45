//! Input model: pointer buttons, drag payloads, and the gesture state machine.
//!
//! `InputState` is the active gesture tracked by the controller between
//! pointer-down and pointer-up. It only ever describes the current pointer
//! sequence; a pointer-up or a cancel returns it to `Idle`.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::vec2::Point;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` index.
    #[must_use]
    pub fn from_dom(index: i16) -> Option<Self> {
        match index {
            0 => Some(Self::Primary),
            1 => Some(Self::Middle),
            2 => Some(Self::Secondary),
            _ => None,
        }
    }
}

/// Payload handed to a dragger's setter for one pointer move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragEvent {
    /// Absolute pointer position.
    pub position: Point,
    /// Movement since the previous event of the same drag.
    pub delta: Point,
}

impl DragEvent {
    /// Build the event for a move from `last` to `position`.
    #[must_use]
    pub fn between(last: Point, position: Point) -> Self {
        Self { position, delta: position - last }
    }
}

/// Internal state for the pointer state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A dragger of the selected shape is being moved.
    DraggingHandle {
        /// Index into the controller's current draggers.
        index: usize,
        /// Pointer position at the previous event, used to compute deltas.
        last: Point,
    },
}

impl InputState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::DraggingHandle { .. })
    }
}
