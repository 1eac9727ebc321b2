//! Movement domain: pushes the derived animation state to the animation player.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::feedback::AnimationPlayback;
use crate::movement::{
    AnimationInputs, ControllerInput, ControllerState, InputLocked, MovementTuning, Player, Slowed,
    derive_animation_state,
};

pub(crate) fn update_animation_state(
    input: Res<ControllerInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (
            &ControllerState,
            &LinearVelocity,
            &mut AnimationPlayback,
            Has<Slowed>,
        ),
        (With<Player>, Without<InputLocked>),
    >,
) {
    for (state, velocity, mut playback, slowed) in &mut query {
        let next = derive_animation_state(
            playback.state,
            AnimationInputs {
                horizontal: input.horizontal(),
                vertical_velocity: velocity.y,
                facing: state.facing,
                wall_sliding: state.is_wall_sliding,
                dashing: state.is_dashing(),
                wall_jumping: state.is_wall_jumping(),
            },
        );

        if playback.set(next, tuning.animation_speed(slowed)) {
            debug!("Animation state -> {:?} ({})", next, next.code());
        }
    }
}
