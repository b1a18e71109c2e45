#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn button_from_dom_indices() {
    assert_eq!(Button::from_dom(0), Some(Button::Primary));
    assert_eq!(Button::from_dom(1), Some(Button::Middle));
    assert_eq!(Button::from_dom(2), Some(Button::Secondary));
    assert_eq!(Button::from_dom(3), None);
    assert_eq!(Button::from_dom(-1), None);
}

#[test]
fn drag_event_between_computes_delta() {
    let ev = DragEvent::between(Point::new(10.0, 20.0), Point::new(13.0, 18.0));
    assert_eq!(ev.position, Point::new(13.0, 18.0));
    assert_eq!(ev.delta, Point::new(3.0, -2.0));
}

#[test]
fn input_state_defaults_to_idle() {
    let s = InputState::default();
    assert_eq!(s, InputState::Idle);
    assert!(!s.is_dragging());
}

#[test]
fn dragging_state_reports_dragging() {
    let s = InputState::DraggingHandle { index: 1, last: Point::ORIGIN };
    assert!(s.is_dragging());
}
