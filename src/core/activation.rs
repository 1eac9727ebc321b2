//! Core domain: collaborator verification when a player is activated.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::combat::RecoilState;
use crate::feedback::AnimationPlayback;
use crate::movement::{ControllerState, Player, SurfaceContact, SurfaceProbes};

/// Unrecoverable configuration error found at activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivationError {
    MissingCollaborators(Vec<&'static str>),
}

impl std::fmt::Display for ActivationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivationError::MissingCollaborators(missing) => {
                write!(f, "player is missing required collaborators: {}", missing.join(", "))
            }
        }
    }
}

impl std::error::Error for ActivationError {}

/// Which required components were found on the player entity.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollaboratorCheck {
    pub rigid_body: bool,
    pub velocity: bool,
    pub gravity_scale: bool,
    pub collider: bool,
    pub controller_state: bool,
    pub surface_probes: bool,
    pub surface_contact: bool,
    pub recoil_state: bool,
    pub animation_playback: bool,
}

impl CollaboratorCheck {
    pub fn verify(&self) -> Result<(), ActivationError> {
        let required = [
            ("RigidBody", self.rigid_body),
            ("LinearVelocity", self.velocity),
            ("GravityScale", self.gravity_scale),
            ("Collider", self.collider),
            ("ControllerState", self.controller_state),
            ("SurfaceProbes", self.surface_probes),
            ("SurfaceContact", self.surface_contact),
            ("RecoilState", self.recoil_state),
            ("AnimationPlayback", self.animation_playback),
        ];

        let missing: Vec<&'static str> = required
            .iter()
            .filter(|(_, present)| !present)
            .map(|(name, _)| *name)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ActivationError::MissingCollaborators(missing))
        }
    }
}

type CollaboratorQuery = (
    Entity,
    Has<RigidBody>,
    Has<LinearVelocity>,
    Has<GravityScale>,
    Has<Collider>,
    Has<ControllerState>,
    Has<SurfaceProbes>,
    Has<SurfaceContact>,
    Has<RecoilState>,
    Has<AnimationPlayback>,
);

/// Runs once per newly added player; a failure stops the app.
pub(crate) fn verify_player_collaborators(
    query: Query<CollaboratorQuery, Added<Player>>,
    mut exit: MessageWriter<AppExit>,
) {
    for (
        entity,
        rigid_body,
        velocity,
        gravity_scale,
        collider,
        controller_state,
        surface_probes,
        surface_contact,
        recoil_state,
        animation_playback,
    ) in &query
    {
        let check = CollaboratorCheck {
            rigid_body,
            velocity,
            gravity_scale,
            collider,
            controller_state,
            surface_probes,
            surface_contact,
            recoil_state,
            animation_playback,
        };

        match check.verify() {
            Ok(()) => info!("Player {:?} activated", entity),
            Err(e) => {
                error!("Player {:?} cannot be activated: {}", entity, e);
                exit.write(AppExit::error());
            }
        }
    }
}
