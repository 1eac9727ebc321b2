//! Combat domain: resolving a melee attack against whatever its region overlaps.

use bevy::prelude::*;

use crate::combat::attacks::{AttackKind, AttackProfile, RecoilAxis};
use crate::combat::components::RecoilState;
use crate::combat::events::{HitEvent, SlashEffect};
use crate::combat::resources::AttackTuning;
use crate::feedback::AudioCue;
use crate::hitstop::HitStopRequest;
use crate::movement::ControllerState;

/// A target returned by an overlap query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanHit {
    pub entity: Entity,
    pub position: Vec2,
}

/// Box overlap query against the attackable layer.
pub trait HitScanner {
    fn overlapping(&self, center: Vec2, half_extents: Vec2) -> Vec<ScanHit>;
}

impl<F> HitScanner for F
where
    F: Fn(Vec2, Vec2) -> Vec<ScanHit>,
{
    fn overlapping(&self, center: Vec2, half_extents: Vec2) -> Vec<ScanHit> {
        self(center, half_extents)
    }
}

/// Damage to deliver to one struck target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strike {
    pub target: Entity,
    /// Unit vector from the target toward the attacker.
    pub push_direction: Vec2,
    pub recoil_strength: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttackOutcome {
    pub kind: AttackKind,
    pub region_center: Vec2,
    pub strikes: Vec<Strike>,
}

impl AttackOutcome {
    pub fn connected(&self) -> bool {
        !self.strikes.is_empty()
    }
}

/// Query the profile's region and, if anything was hit, grant the extra air
/// actions and arm recoil on the profile's axis.
pub fn resolve_attack(
    kind: AttackKind,
    profile: &AttackProfile,
    origin: Vec2,
    vertical: i8,
    controller: &mut ControllerState,
    recoil: &mut RecoilState,
    scanner: &impl HitScanner,
) -> AttackOutcome {
    let region_center = profile.region_center(origin, controller.facing);
    let mut strikes: Vec<Strike> = Vec::new();

    for hit in scanner.overlapping(region_center, profile.half_extents) {
        if strikes.iter().any(|s| s.target == hit.entity) {
            continue;
        }
        let push_direction = (origin - hit.position).normalize_or_zero();
        // Same position: push back toward the attacker's rear
        let push_direction = if push_direction == Vec2::ZERO {
            Vec2::new(-controller.facing.sign(), 0.0)
        } else {
            push_direction
        };
        strikes.push(Strike {
            target: hit.entity,
            push_direction,
            recoil_strength: profile.recoil_speed,
        });
    }

    if !strikes.is_empty() {
        controller.refresh_air_actions();
        match profile.recoil_axis {
            RecoilAxis::X => recoil.recoiling_x = true,
            RecoilAxis::Y => {
                recoil.recoiling_y = true;
                recoil.upward_y = vertical < 0;
            }
        }
    }

    AttackOutcome {
        kind,
        region_center,
        strikes,
    }
}

/// One attack press by `source`, already past attack selection.
#[derive(Debug, Clone, Copy)]
pub struct AttackRequest {
    pub source: Entity,
    pub kind: AttackKind,
    pub origin: Vec2,
    pub vertical: i8,
}

/// Everything an attack press sends out.
#[derive(Debug, Clone, PartialEq)]
pub struct AttackReport {
    pub outcome: AttackOutcome,
    pub cues: Vec<AudioCue>,
    pub slash: SlashEffect,
    pub hits: Vec<HitEvent>,
    pub hit_stop: Option<HitStopRequest>,
}

/// Resolve an attack and collect its messages. The cue and the slash go out
/// on every press; hits and the hit-stop only when something was struck.
pub fn perform_attack(
    request: AttackRequest,
    tuning: &AttackTuning,
    on_hit: Option<HitStopRequest>,
    controller: &mut ControllerState,
    recoil: &mut RecoilState,
    scanner: &impl HitScanner,
) -> AttackReport {
    let profile = tuning.profile(request.kind);
    let outcome = resolve_attack(
        request.kind,
        profile,
        request.origin,
        request.vertical,
        controller,
        recoil,
        scanner,
    );

    let slash = SlashEffect {
        kind: request.kind,
        position: outcome.region_center,
        angle_degrees: profile.effect_angle,
        facing: controller.facing,
    };

    let hits = outcome
        .strikes
        .iter()
        .map(|strike| HitEvent {
            source: request.source,
            target: strike.target,
            damage: tuning.damage,
            push_direction: strike.push_direction,
            recoil_strength: strike.recoil_strength,
        })
        .collect();

    let hit_stop = if outcome.connected() { on_hit } else { None };

    AttackReport {
        outcome,
        cues: vec![AudioCue::Attack],
        slash,
        hits,
        hit_stop,
    }
}
