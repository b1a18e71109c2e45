#![allow(clippy::float_cmp)]

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use super::*;

/// Generator that always yields the same word, pinning `random::<f64>()`
/// to either end of `[0, 1)`.
struct FixedRng(u64);

impl RngCore for FixedRng {
    fn next_u32(&mut self) -> u32 {
        (self.0 >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(self.0 as u8);
    }
}

fn low() -> FixedRng {
    FixedRng(0)
}

fn high() -> FixedRng {
    FixedRng(u64::MAX)
}

const FACTORY: ShapeFactory = ShapeFactory { width: 400.0, height: 300.0 };

// =============================================================
// Styles
// =============================================================

#[test]
fn color_channels_are_multiples_of_ten() {
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..200 {
        let c = ShapeFactory::color(&mut rng);
        for channel in [c.r, c.g, c.b] {
            assert_eq!(channel % 10, 0);
            assert!(channel <= 250);
        }
    }
}

#[test]
fn color_extremes() {
    assert_eq!(ShapeFactory::color(&mut low()), Color::rgb(0, 0, 0));
    assert_eq!(ShapeFactory::color(&mut high()), Color::rgb(250, 250, 250));
}

#[test]
fn style_width_is_one_to_three() {
    assert_eq!(ShapeFactory::style(&mut low()).width, 1.0);
    assert_eq!(ShapeFactory::style(&mut high()).width, 3.0);
}

// =============================================================
// Points and lines
// =============================================================

#[test]
fn point_extremes_respect_margin() {
    assert_eq!(FACTORY.point(&mut low()), Point::new(5.0, 5.0));
    assert_eq!(FACTORY.point(&mut high()), Point::new(394.0, 294.0));
}

#[test]
fn random_lines_stay_on_canvas() {
    let mut rng = SmallRng::seed_from_u64(11);
    for _ in 0..100 {
        let line = FACTORY.line(&mut rng);
        for p in [line.start, line.end] {
            assert!((5.0..395.0).contains(&p.x), "{p:?}");
            assert!((5.0..295.0).contains(&p.y), "{p:?}");
            assert_eq!(p.x.fract(), 0.0);
        }
    }
}

// =============================================================
// Circles
// =============================================================

#[test]
fn circle_at_low_end() {
    let c = FACTORY.circle(&mut low());
    assert_eq!(c.center, Point::new(20.0, 20.0));
    assert_eq!(c.radius, 10.0);
}

#[test]
fn random_circles_fit_inside_canvas() {
    let mut rng = SmallRng::seed_from_u64(3);
    for _ in 0..200 {
        let c = FACTORY.circle(&mut rng);
        assert!(c.radius >= 10.0);
        assert!(c.center.x - c.radius >= 0.0, "{c:?}");
        assert!(c.center.y - c.radius >= 0.0, "{c:?}");
        assert!(c.center.x + c.radius <= FACTORY.width, "{c:?}");
        assert!(c.center.y + c.radius <= FACTORY.height, "{c:?}");
    }
}

#[test]
fn tiny_canvas_falls_back_to_min_radius() {
    let tiny = ShapeFactory::new(30.0, 30.0);
    let c = tiny.circle(&mut high());
    assert_eq!(c.center, Point::new(20.0, 20.0));
    assert_eq!(c.radius, 10.0);
}

// =============================================================
// Curves
// =============================================================

#[test]
fn curve_is_a_loop_around_a_random_point() {
    let curve = FACTORY.curve(&mut low()).unwrap();
    assert_eq!(curve.x_fn.source(), "5+100*sin(t)");
    assert_eq!(curve.y_fn.source(), "5+100*cos(t)");
    assert_eq!(curve.t_min, 0.0);
    assert_eq!(curve.t_max, 6.28);
    assert_eq!(curve.segments, 5);
    assert_eq!(curve.point_at(0.0), Point::new(5.0, 105.0));
}

#[test]
fn curve_segments_upper_bound() {
    assert_eq!(FACTORY.curve(&mut high()).unwrap().segments, 29);
}

#[test]
fn seeded_generation_is_reproducible() {
    let a = FACTORY.curve(&mut SmallRng::seed_from_u64(42)).unwrap();
    let b = FACTORY.curve(&mut SmallRng::seed_from_u64(42)).unwrap();
    assert_eq!(a.x_fn.source(), b.x_fn.source());
    assert_eq!(a.style, b.style);
}
