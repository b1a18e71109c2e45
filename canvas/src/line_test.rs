#![allow(clippy::float_cmp)]

use super::*;
use crate::style::Color;
use crate::surface::{DrawOp, RecordingSurface};

fn line(ax: f64, ay: f64, bx: f64, by: f64) -> Line {
    Line::new(Point::new(ax, ay), Point::new(bx, by), Style::new(2.0, Color::rgb(200, 0, 0)))
}

#[test]
fn hit_on_and_near_segment() {
    let l = line(0.0, 0.0, 100.0, 0.0);
    assert!(l.is_hit(Point::new(50.0, 0.0)));
    assert!(l.is_hit(Point::new(50.0, 3.0)));
    assert!(l.is_hit(Point::new(50.0, -3.0)));
    assert!(!l.is_hit(Point::new(50.0, 3.5)));
}

#[test]
fn no_hit_beyond_endpoints() {
    let l = line(0.0, 0.0, 100.0, 0.0);
    assert!(l.is_hit(Point::new(0.0, 1.0)));
    assert!(l.is_hit(Point::new(100.0, 1.0)));
    assert!(!l.is_hit(Point::new(101.0, 0.0)));
    assert!(!l.is_hit(Point::new(-1.0, 0.0)));
}

#[test]
fn diagonal_hit() {
    let l = line(0.0, 0.0, 30.0, 40.0);
    // (4, -3) is perpendicular to the direction (3, 4) at distance 5.
    assert!(!l.is_hit(Point::new(15.0 + 4.0, 20.0 - 3.0)));
    assert!(l.is_hit(Point::new(15.0 + 1.6, 20.0 - 1.2)));
}

#[test]
fn degenerate_line_hits_like_a_point() {
    let l = line(10.0, 10.0, 10.0, 10.0);
    assert!(l.is_hit(Point::new(12.0, 10.0)));
    assert!(!l.is_hit(Point::new(14.0, 10.0)));
}

#[test]
fn draw_strokes_segment() {
    let l = line(1.0, 2.0, 3.0, 4.0);
    let mut s = RecordingSurface::new();
    l.draw(&mut s).unwrap();
    assert_eq!(
        s.ops,
        vec![
            DrawOp::BeginPath,
            DrawOp::MoveTo(Point::new(1.0, 2.0)),
            DrawOp::LineTo(Point::new(3.0, 4.0)),
            DrawOp::LineWidth(2.0),
            DrawOp::StrokeColor(Color::rgb(200, 0, 0)),
            DrawOp::Stroke,
        ]
    );
}

#[test]
fn endpoint_draggers_move_endpoints_absolutely() {
    let mut l = line(0.0, 0.0, 10.0, 10.0);
    let draggers = l.create_draggers();
    assert_eq!(draggers.len(), 2);
    assert_eq!(draggers[0].handle, Handle::Line(LineEnd::Start));
    assert_eq!(draggers[1].handle, Handle::Line(LineEnd::End));

    let ev = DragEvent { position: Point::new(-5.0, 7.0), delta: Point::new(100.0, 100.0) };
    assert!(l.drag_endpoint(LineEnd::End, &ev));
    assert_eq!(l.end, Point::new(-5.0, 7.0));
    assert_eq!(l.start, Point::ORIGIN);
}
