//! Core domain: per-tick ordering, camera, player activation and the practice arena.

mod activation;
mod spawn;
mod systems;
#[cfg(test)]
mod tests;

pub use activation::{ActivationError, CollaboratorCheck};

use bevy::prelude::*;

use crate::core::activation::verify_player_collaborators;
use crate::core::spawn::{spawn_player, spawn_practice_arena};
use crate::core::systems::setup_camera;

/// Per-tick order of the controller. Sense through Recoil write body
/// velocity and run in `FixedUpdate` so they step with physics; the rest run
/// once per rendered frame. Recoil always runs after locomotion so its
/// velocity override wins.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerStep {
    Input,
    Sense,
    Locomotion,
    Combat,
    Recoil,
    Animate,
    TimeScale,
    Present,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            FixedUpdate,
            (
                ControllerStep::Sense,
                ControllerStep::Locomotion,
                ControllerStep::Combat,
                ControllerStep::Recoil,
            )
                .chain(),
        )
        .configure_sets(
            Update,
            (
                ControllerStep::Input,
                ControllerStep::Animate,
                ControllerStep::TimeScale,
                ControllerStep::Present,
            )
                .chain(),
        )
        .add_systems(
            Startup,
            (setup_camera, spawn_practice_arena, spawn_player).chain(),
        )
        .add_systems(Update, verify_player_collaborators.in_set(ControllerStep::Input));
    }
}
