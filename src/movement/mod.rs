//! Movement domain: input sampling, locomotion state machine, and animation state.

mod animation;
mod components;
mod locomotion;
mod resources;
mod systems;
mod timers;

pub use animation::{AnimationInputs, AnimationState, derive_animation_state};
pub use components::{
    ControllerState, Facing, GameLayer, Ground, InputLocked, Player, Slowed, SurfaceContact,
    SurfaceProbes, Wall,
};
pub use locomotion::{BodyState, MovementCue, axis_sign, step_locomotion};
pub use resources::{ControllerInput, MovementTuning};
pub use timers::{Countdown, DashPhase, DashSequence};

use bevy::prelude::*;

use crate::core::ControllerStep;
use crate::movement::systems::{
    apply_locomotion, consume_input_edges, detect_surfaces, freeze_locked_bodies, read_input,
    release_unlocked_bodies, update_animation_state,
};

#[cfg(feature = "dev-tools")]
pub(crate) use crate::movement::systems::input::bound_keys;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<ControllerInput>()
            .add_systems(Update, read_input.in_set(ControllerStep::Input))
            .add_systems(
                FixedUpdate,
                (freeze_locked_bodies, release_unlocked_bodies, detect_surfaces)
                    .chain()
                    .in_set(ControllerStep::Sense),
            )
            .add_systems(
                FixedUpdate,
                apply_locomotion.in_set(ControllerStep::Locomotion),
            )
            .add_systems(
                FixedUpdate,
                consume_input_edges.after(ControllerStep::Recoil),
            )
            .add_systems(
                Update,
                update_animation_state.in_set(ControllerStep::Animate),
            );
    }
}
