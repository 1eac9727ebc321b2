//! Combat domain: directional melee attacks, recoil, and damage delivery.

mod attacks;
mod components;
mod events;
mod recoil;
mod resources;
mod strike;
mod systems;

pub use attacks::{AttackKind, AttackProfile, RecoilAxis, select_attack};
pub use components::{Damageable, EffectLifetime, Health, Invincible, RecoilState};
pub use events::{HitEvent, PlayerDamaged, SlashEffect, TargetDefeated};
pub use recoil::apply_recoil;
pub use resources::{AttackTuning, CombatTuning, RecoilTuning};
pub use strike::{
    AttackOutcome, AttackReport, AttackRequest, HitScanner, ScanHit, Strike, perform_attack,
    resolve_attack,
};

use bevy::prelude::*;

use crate::combat::systems::{
    apply_hits, apply_recoil_velocity, cleanup_expired_effects, handle_player_damaged,
    process_attacks, process_defeats, spawn_slash_effects, tick_invincibility,
};
use crate::core::ControllerStep;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AttackTuning>()
            .init_resource::<RecoilTuning>()
            .init_resource::<CombatTuning>()
            .add_message::<HitEvent>()
            .add_message::<SlashEffect>()
            .add_message::<PlayerDamaged>()
            .add_message::<TargetDefeated>()
            .add_systems(
                FixedUpdate,
                (
                    tick_invincibility,
                    handle_player_damaged,
                    process_attacks,
                    apply_hits,
                    process_defeats,
                )
                    .chain()
                    .in_set(ControllerStep::Combat),
            )
            .add_systems(
                FixedUpdate,
                apply_recoil_velocity.in_set(ControllerStep::Recoil),
            )
            .add_systems(
                Update,
                (spawn_slash_effects, cleanup_expired_effects).in_set(ControllerStep::Present),
            );
    }
}
