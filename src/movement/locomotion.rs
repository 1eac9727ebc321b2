//! Movement domain: the per-tick locomotion state machine.
//!
//! Everything here is a pure function of the controller state, this tick's
//! surface contact and input, and the body's current velocity. The Bevy
//! systems in `systems::movement` copy physics state in and out.

use bevy::prelude::*;

use crate::movement::components::{ControllerState, Facing, SurfaceContact};
use crate::movement::resources::{ControllerInput, MovementTuning};
use crate::movement::timers::DashTransition;

/// Inputs smaller than this are treated as neutral.
const AXIS_DEADZONE: f32 = 0.1;

/// Clamp a continuous axis into {-1, 0, 1} for state decisions.
pub fn axis_sign(value: f32) -> i8 {
    if value > AXIS_DEADZONE {
        1
    } else if value < -AXIS_DEADZONE {
        -1
    } else {
        0
    }
}

/// The writable part of the rigid body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    pub velocity: Vec2,
    pub gravity_scale: f32,
}

/// Fire-and-forget sound triggers raised by locomotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementCue {
    Jump,
    DoubleJump,
    WallJump,
    Dash,
}

/// Advance locomotion by one tick.
pub fn step_locomotion(
    state: &mut ControllerState,
    contact: SurfaceContact,
    input: &ControllerInput,
    tuning: &MovementTuning,
    slowed: bool,
    body: &mut BodyState,
    dt: f32,
) -> Vec<MovementCue> {
    let mut cues = Vec::new();

    state.time_since_dash += dt;
    match state.dash.tick(dt) {
        DashTransition::Ended => {
            body.gravity_scale = state.baseline_gravity;
            debug!("Dash ended, gravity restored to {}", state.baseline_gravity);
        }
        DashTransition::Ready => {
            state.can_dash = true;
        }
        DashTransition::None => {}
    }
    state.wall_jump_lock.tick(dt);

    if contact.grounded {
        state.can_double_jump = true;
    }

    // Movement, jumping and flipping are suspended for the whole dash
    if state.is_dashing() {
        body.gravity_scale = 0.0;
        body.velocity = Vec2::new(state.facing.sign() * tuning.dash_power, 0.0);
        return cues;
    }

    let horizontal = input.horizontal();

    state.move_speed = tuning.effective_move_speed(slowed);

    // Wall slide caps the fall speed
    state.is_wall_sliding = contact.walled && !contact.grounded && horizontal != 0;
    if state.is_wall_sliding {
        body.velocity.y = body.velocity.y.max(-tuning.wall_slide_speed);
        state.wall_jump_counter = tuning.wall_jump_window;
        state.wall_jump_direction = state.facing.flipped();
        state.wall_jump_lock.cancel();
    } else {
        state.wall_jump_counter = (state.wall_jump_counter - dt).max(0.0);
    }

    if input.dash_pressed && state.can_dash && !state.is_wall_sliding {
        state.can_dash = false;
        state.time_since_dash = 0.0;
        state.dash.start(tuning.dash_duration, tuning.dash_cooldown);
        body.gravity_scale = 0.0;
        body.velocity = Vec2::new(state.facing.sign() * tuning.dash_power, 0.0);
        cues.push(MovementCue::Dash);
        debug!("Dash started facing {:?}", state.facing);
        return cues;
    }

    if input.jump_pressed {
        if state.wall_jump_counter > 0.0 {
            let direction = state.wall_jump_direction;
            body.velocity = Vec2::new(
                direction.sign() * tuning.wall_jump_power.x,
                tuning.wall_jump_power.y,
            );
            state.wall_jump_counter = 0.0;
            state.wall_jump_lock.start(tuning.wall_jump_duration);
            // An airborne press spends the air jump even when the wall jump wins
            if !contact.grounded {
                state.can_double_jump = false;
            }
            if state.facing != direction {
                state.facing = direction;
            }
            cues.push(MovementCue::WallJump);
            debug!("Wall jump toward {:?}", direction);
        } else if state.can_double_jump {
            body.velocity.y = tuning.jump_power;
            if contact.grounded {
                cues.push(MovementCue::Jump);
            } else {
                state.can_double_jump = false;
                cues.push(MovementCue::DoubleJump);
                debug!("Double jump consumed");
            }
        }
    }

    // Short hop
    if input.jump_released && body.velocity.y > 0.0 {
        body.velocity.y *= 0.5;
    }

    if !state.is_wall_jumping() {
        body.velocity.x = horizontal as f32 * state.move_speed;

        let opposes_facing = match state.facing {
            Facing::Right => horizontal < 0,
            Facing::Left => horizontal > 0,
        };
        if opposes_facing {
            state.facing = state.facing.flipped();
        }
    }

    cues
}
