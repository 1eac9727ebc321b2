//! Movement domain: locomotion systems that bridge physics and the state machine.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::feedback::AudioCue;
use crate::movement::{
    BodyState, ControllerInput, ControllerState, InputLocked, MovementTuning, Player, Slowed,
    SurfaceContact, step_locomotion,
};

pub(crate) fn apply_locomotion(
    time: Res<Time>,
    input: Res<ControllerInput>,
    tuning: Res<MovementTuning>,
    mut cues: MessageWriter<AudioCue>,
    mut query: Query<
        (
            &mut ControllerState,
            &SurfaceContact,
            &mut LinearVelocity,
            &mut GravityScale,
            Has<Slowed>,
        ),
        (With<Player>, Without<InputLocked>),
    >,
) {
    let dt = time.delta_secs();

    for (mut state, contact, mut velocity, mut gravity, slowed) in &mut query {
        let mut body = BodyState {
            velocity: velocity.0,
            gravity_scale: gravity.0,
        };

        let fired = step_locomotion(&mut state, *contact, &input, &tuning, slowed, &mut body, dt);

        velocity.0 = body.velocity;
        gravity.0 = body.gravity_scale;

        for cue in fired {
            cues.write(AudioCue::from(cue));
        }
    }
}

/// Freeze a character the moment its input is locked.
pub(crate) fn freeze_locked_bodies(
    mut commands: Commands,
    mut query: Query<(Entity, &mut LinearVelocity), (With<RigidBody>, Added<InputLocked>)>,
) {
    // `RigidBody` is an immutable component; changing it means re-inserting it.
    for (entity, mut velocity) in &mut query {
        commands.entity(entity).insert(RigidBody::Static);
        velocity.0 = Vec2::ZERO;
        info!("Input locked, body frozen");
    }
}

/// A player is only ever static while locked, so any static player without
/// the lock has just been released.
pub(crate) fn release_unlocked_bodies(
    mut commands: Commands,
    query: Query<(Entity, &RigidBody), (With<Player>, Without<InputLocked>)>,
) {
    for (entity, body) in &query {
        if *body == RigidBody::Static {
            commands.entity(entity).insert(RigidBody::Dynamic);
            info!("Input unlocked, body released");
        }
    }
}
