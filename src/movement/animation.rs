//! Movement domain: discrete animation state derived each tick.

use crate::movement::Facing;

/// Velocity above this is "rising", below its negation is "falling".
const VERTICAL_THRESHOLD: f32 = 0.1;

/// Animation states, in the integer order the animation player expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    RunningRight,
    RunningLeft,
    Jumping,
    Falling,
    Dashing,
    WallSliding,
}

impl AnimationState {
    pub fn code(self) -> i32 {
        match self {
            AnimationState::Idle => 0,
            AnimationState::RunningRight => 1,
            AnimationState::RunningLeft => 2,
            AnimationState::Jumping => 3,
            AnimationState::Falling => 4,
            AnimationState::Dashing => 5,
            AnimationState::WallSliding => 6,
        }
    }
}

/// Measurements the animation state is derived from.
#[derive(Debug, Clone, Copy)]
pub struct AnimationInputs {
    pub horizontal: i8,
    pub vertical_velocity: f32,
    pub facing: Facing,
    pub wall_sliding: bool,
    pub dashing: bool,
    pub wall_jumping: bool,
}

/// Precedence: Dashing > WallSliding > Jumping/Falling > Idle/Running.
///
/// Running is tagged by facing after this tick's flip. While wall-jump
/// suppression is active the previous state is kept, unless dashing.
pub fn derive_animation_state(
    previous: AnimationState,
    inputs: AnimationInputs,
) -> AnimationState {
    if inputs.dashing {
        return AnimationState::Dashing;
    }
    if inputs.wall_jumping {
        return previous;
    }
    if inputs.wall_sliding {
        return AnimationState::WallSliding;
    }
    if inputs.vertical_velocity > VERTICAL_THRESHOLD {
        return AnimationState::Jumping;
    }
    if inputs.vertical_velocity < -VERTICAL_THRESHOLD {
        return AnimationState::Falling;
    }
    if inputs.horizontal == 0 {
        return AnimationState::Idle;
    }
    match inputs.facing {
        Facing::Right => AnimationState::RunningRight,
        Facing::Left => AnimationState::RunningLeft,
    }
}
