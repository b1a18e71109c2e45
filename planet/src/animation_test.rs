#![allow(clippy::float_cmp)]

use glam::Mat4;

use super::*;
use crate::backend::RecordingBackend;
use crate::scene::ShaderSources;

fn scene() -> PlanetScene {
    let shaders = ShaderSources {
        minimal_vs: String::new(),
        frag_color_fs: String::new(),
        phong_vs: String::new(),
        phong_fs: String::new(),
        planet_vs: String::new(),
        planet_fs: String::new(),
    };
    PlanetScene::new(&mut RecordingBackend::new(), &shaders, 1.0).unwrap()
}

#[test]
fn stopped_by_default_at_twenty_degrees() {
    let a = Animation::default();
    assert!(!a.is_running());
    assert_eq!(a.speed(), 20.0);
}

#[test]
fn stopped_animation_leaves_scene_alone() {
    let mut s = scene();
    assert!(!Animation::default().tick(&mut s, 1.0));
    assert_eq!(s.world().transformation, Mat4::IDENTITY);
}

#[test]
fn running_animation_turns_world_y_by_speed_times_dt() {
    let mut s = scene();
    let mut a = Animation::default();
    a.resume();
    assert!(a.tick(&mut s, 0.5));
    assert!(s.world().transformation.abs_diff_eq(Mat4::from_rotation_y(10f32.to_radians()), 1e-6));
}

#[test]
fn set_speed_and_stop() {
    let mut s = scene();
    let mut a = Animation::default();
    a.resume();
    a.set_speed(90.0);
    a.tick(&mut s, 1.0);
    a.stop();
    a.tick(&mut s, 1.0);
    assert!(s.world().transformation.abs_diff_eq(Mat4::from_rotation_y(90f32.to_radians()), 1e-6));
}

#[test]
fn bad_inputs_are_ignored() {
    let mut s = scene();
    let mut a = Animation::default();
    a.resume();
    a.set_speed(f32::NAN);
    assert_eq!(a.speed(), 20.0);
    assert!(!a.tick(&mut s, -1.0));
    assert!(!a.tick(&mut s, f32::INFINITY));
    assert_eq!(s.world().transformation, Mat4::IDENTITY);
}
