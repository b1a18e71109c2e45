#![allow(clippy::float_cmp)]

use super::*;
use crate::circle::Circle;
use crate::line::Line;
use crate::style::Style;
use crate::surface::{DrawOp, RecordingSurface};

fn circle_shape() -> Shape {
    Shape::Circle(Circle::new(Point::new(50.0, 50.0), 20.0, Style::new(2.0, Color::rgb(9, 9, 9))))
}

fn line_shape() -> Shape {
    Shape::Line(Line::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0), Style::default()))
}

fn dragger(handle: Handle, filled: bool) -> Dragger {
    Dragger::new(handle, DraggerStyle { radius: 4.0, color: Color::rgb(9, 9, 9), filled })
}

#[test]
fn get_reads_bound_field() {
    let s = circle_shape();
    assert_eq!(dragger(Handle::Circle(CircleHandle::Center), false).get(&s), Some(Point::new(50.0, 50.0)));
    assert_eq!(dragger(Handle::Circle(CircleHandle::Radius), true).get(&s), Some(Point::new(70.0, 50.0)));
}

#[test]
fn mismatched_shape_is_ignored() {
    let mut s = line_shape();
    let d = dragger(Handle::Circle(CircleHandle::Center), false);
    assert_eq!(d.get(&s), None);
    let ev = DragEvent { position: Point::new(1.0, 1.0), delta: Point::new(1.0, 1.0) };
    assert!(!d.set(&mut s, &ev));
    assert_eq!(s, line_shape());
    assert!(!d.is_hit(&s, Point::ORIGIN));
}

#[test]
fn set_writes_through_to_shape() {
    let mut s = circle_shape();
    let d = dragger(Handle::Circle(CircleHandle::Radius), true);
    let ev = DragEvent { position: Point::new(75.0, 50.0), delta: Point::new(5.0, 0.0) };
    assert!(d.set(&mut s, &ev));
    assert_eq!(d.get(&s), Some(Point::new(75.0, 50.0)));
}

#[test]
fn line_endpoint_set() {
    let mut s = line_shape();
    let d = dragger(Handle::Line(LineEnd::Start), true);
    let ev = DragEvent { position: Point::new(-3.0, 4.0), delta: Point::ORIGIN };
    assert!(d.set(&mut s, &ev));
    assert_eq!(d.get(&s), Some(Point::new(-3.0, 4.0)));
}

#[test]
fn hit_within_radius_plus_slop() {
    let s = circle_shape();
    let d = dragger(Handle::Circle(CircleHandle::Center), false);
    assert!(d.is_hit(&s, Point::new(56.0, 50.0)));
    assert!(!d.is_hit(&s, Point::new(56.5, 50.0)));
}

#[test]
fn hollow_dragger_strokes_and_filled_dragger_fills() {
    let s = circle_shape();

    let mut out = RecordingSurface::new();
    dragger(Handle::Circle(CircleHandle::Center), false).draw(&s, &mut out).unwrap();
    assert!(out.ops.contains(&DrawOp::Stroke));
    assert!(!out.ops.contains(&DrawOp::Fill));

    let mut out = RecordingSurface::new();
    dragger(Handle::Circle(CircleHandle::Radius), true).draw(&s, &mut out).unwrap();
    assert!(out.ops.contains(&DrawOp::Fill));
    assert!(out.ops.contains(&DrawOp::FillColor(Color::rgb(9, 9, 9))));
    assert!(out.ops.contains(&DrawOp::Arc { center: Point::new(70.0, 50.0), radius: 4.0, start: 0.0, end: TAU }));
}

#[test]
fn draw_on_mismatched_shape_draws_nothing() {
    let mut out = RecordingSurface::new();
    dragger(Handle::Line(LineEnd::End), true).draw(&circle_shape(), &mut out).unwrap();
    assert!(out.ops.is_empty());
}
