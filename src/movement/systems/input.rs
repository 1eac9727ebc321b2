//! Movement domain: input sampling for the controller.

use bevy::prelude::*;

use crate::movement::ControllerInput;

pub(crate) const LEFT_KEYS: [KeyCode; 2] = [KeyCode::KeyA, KeyCode::ArrowLeft];
pub(crate) const RIGHT_KEYS: [KeyCode; 2] = [KeyCode::KeyD, KeyCode::ArrowRight];
pub(crate) const DOWN_KEYS: [KeyCode; 2] = [KeyCode::KeyS, KeyCode::ArrowDown];
pub(crate) const UP_KEYS: [KeyCode; 2] = [KeyCode::KeyW, KeyCode::ArrowUp];
pub(crate) const JUMP_KEYS: [KeyCode; 2] = [KeyCode::Space, KeyCode::KeyK];
pub(crate) const DASH_KEYS: [KeyCode; 2] = [KeyCode::ShiftLeft, KeyCode::KeyJ];
pub(crate) const ATTACK_KEYS: [KeyCode; 2] = [KeyCode::KeyZ, KeyCode::KeyU];

/// Every key the controller reads.
#[cfg(feature = "dev-tools")]
pub(crate) fn bound_keys() -> impl Iterator<Item = KeyCode> {
    [
        LEFT_KEYS, RIGHT_KEYS, DOWN_KEYS, UP_KEYS, JUMP_KEYS, DASH_KEYS, ATTACK_KEYS,
    ]
    .into_iter()
    .flatten()
}

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<ControllerInput>) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.any_pressed(LEFT_KEYS) {
        x -= 1.0;
    }
    if keyboard.any_pressed(RIGHT_KEYS) {
        x += 1.0;
    }

    // Vertical axis (attack direction)
    let mut y = 0.0;
    if keyboard.any_pressed(DOWN_KEYS) {
        y -= 1.0;
    }
    if keyboard.any_pressed(UP_KEYS) {
        y += 1.0;
    }

    let sample = ControllerInput {
        axis: Vec2::new(x, y),
        jump_pressed: keyboard.any_just_pressed(JUMP_KEYS),
        jump_released: keyboard.any_just_released(JUMP_KEYS),
        dash_pressed: keyboard.any_just_pressed(DASH_KEYS),
        attack_pressed: keyboard.any_just_pressed(ATTACK_KEYS),
    };
    input.latch(&sample);
}

/// Runs last in the fixed step, once locomotion and combat have acted on the edges.
pub(crate) fn consume_input_edges(mut input: ResMut<ControllerInput>) {
    input.clear_edges();
}
