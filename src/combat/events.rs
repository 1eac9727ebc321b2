//! Combat domain: combat-related events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::combat::attacks::AttackKind;
use crate::movement::Facing;

/// A strike delivered to a damageable target.
#[derive(Debug, Clone, PartialEq)]
pub struct HitEvent {
    pub source: Entity,
    pub target: Entity,
    pub damage: f32,
    /// Unit vector from the target toward the attacker.
    pub push_direction: Vec2,
    pub recoil_strength: f32,
}

impl Message for HitEvent {}

/// Visual cue for an attack, fired whether or not it connected.
#[derive(Debug, Clone, PartialEq)]
pub struct SlashEffect {
    pub kind: AttackKind,
    pub position: Vec2,
    pub angle_degrees: f32,
    pub facing: Facing,
}

impl Message for SlashEffect {}

/// Raised by external code when the player takes damage.
#[derive(Debug)]
pub struct PlayerDamaged {
    pub player: Entity,
    pub amount: f32,
}

impl Message for PlayerDamaged {}

#[derive(Debug)]
pub struct TargetDefeated {
    pub entity: Entity,
}

impl Message for TargetDefeated {}
