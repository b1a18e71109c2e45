#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn lower_case_turns_forward() {
    assert_eq!(key_rotation("x"), Some((Joint::WorldX, 5.0)));
    assert_eq!(key_rotation("y"), Some((Joint::WorldY, 5.0)));
}

#[test]
fn shift_turns_back() {
    assert_eq!(key_rotation("X"), Some((Joint::WorldX, -5.0)));
    assert_eq!(key_rotation("Y"), Some((Joint::WorldY, -5.0)));
}

#[test]
fn other_keys_are_unbound() {
    for key in ["z", "h", "Enter", "", "xy"] {
        assert_eq!(key_rotation(key), None, "{key:?}");
    }
}
