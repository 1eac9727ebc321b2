//! Data definitions for the controller RON file.
//!
//! These structs mirror the structure in assets/data/controller.ron and are
//! converted into the tuning resources each domain reads.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::combat::{AttackProfile, AttackTuning, CombatTuning, RecoilAxis, RecoilTuning};
use crate::hitstop::{HitStopRequest, HitStopTuning};
use crate::movement::MovementTuning;

// ============================================================================
// Root (controller.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct ControllerDef {
    pub schema_version: u32,
    pub movement: MovementDef,
    pub wall_jump: WallJumpDef,
    pub dash: DashDef,
    pub attacks: AttacksDef,
    pub recoil: RecoilDef,
    pub combat: CombatDef,
    pub hit_stop: HitStopDef,
}

// ============================================================================
// Movement
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct MovementDef {
    pub move_speed: f32,
    pub jump_power: f32,
    pub wall_slide_speed: f32,
    pub ground_probe_radius: f32,
    pub wall_probe_radius: f32,
    pub slow_ratio: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct WallJumpDef {
    pub power: (f32, f32),
    pub window: f32,
    pub duration: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct DashDef {
    pub power: f32,
    pub duration: f32,
    pub cooldown: f32,
}

// ============================================================================
// Combat
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Reflect)]
pub enum RecoilAxisDef {
    X,
    Y,
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct AttackProfileDef {
    pub anchor: (f32, f32),
    pub half_extents: (f32, f32),
    pub recoil_axis: RecoilAxisDef,
    pub recoil_speed: f32,
    pub effect_angle: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct AttacksDef {
    pub damage: f32,
    pub side: AttackProfileDef,
    pub up: AttackProfileDef,
    pub down: AttackProfileDef,
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct RecoilDef {
    pub x_steps: u32,
    pub y_steps: u32,
    pub x_speed: f32,
    pub y_speed: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct CombatDef {
    pub iframes_duration: f32,
    pub hit_flash_speed: f32,
    pub effect_duration: f32,
}

// ============================================================================
// Hit-stop
// ============================================================================

#[derive(Debug, Clone, Copy, Deserialize, Serialize, Reflect)]
pub struct HitStopDef {
    pub on_hit: Option<HitStopRequestDef>,
    pub on_damaged: Option<HitStopRequestDef>,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, Reflect)]
pub struct HitStopRequestDef {
    pub target_scale: f32,
    pub restore_speed: f32,
    #[serde(default)]
    pub delay: f32,
}

// ============================================================================
// Conversion into tuning resources
// ============================================================================

impl ControllerDef {
    pub fn movement_tuning(&self) -> MovementTuning {
        MovementTuning {
            move_speed: self.movement.move_speed,
            jump_power: self.movement.jump_power,
            wall_slide_speed: self.movement.wall_slide_speed,
            wall_jump_power: Vec2::from(self.wall_jump.power),
            wall_jump_window: self.wall_jump.window,
            wall_jump_duration: self.wall_jump.duration,
            dash_power: self.dash.power,
            dash_duration: self.dash.duration,
            dash_cooldown: self.dash.cooldown,
            ground_probe_radius: self.movement.ground_probe_radius,
            wall_probe_radius: self.movement.wall_probe_radius,
            slow_ratio: self.movement.slow_ratio,
        }
    }

    pub fn attack_tuning(&self) -> AttackTuning {
        AttackTuning {
            damage: self.attacks.damage,
            side: self.attacks.side.to_profile(),
            up: self.attacks.up.to_profile(),
            down: self.attacks.down.to_profile(),
        }
    }

    pub fn recoil_tuning(&self) -> RecoilTuning {
        RecoilTuning {
            x_steps: self.recoil.x_steps,
            y_steps: self.recoil.y_steps,
            x_speed: self.recoil.x_speed,
            y_speed: self.recoil.y_speed,
        }
    }

    pub fn combat_tuning(&self) -> CombatTuning {
        CombatTuning {
            iframes_duration: self.combat.iframes_duration,
            hit_flash_speed: self.combat.hit_flash_speed,
            effect_duration: self.combat.effect_duration,
        }
    }

    pub fn hit_stop_tuning(&self) -> HitStopTuning {
        HitStopTuning {
            on_hit: self.hit_stop.on_hit.map(HitStopRequestDef::to_request),
            on_damaged: self.hit_stop.on_damaged.map(HitStopRequestDef::to_request),
        }
    }
}

impl AttackProfileDef {
    fn to_profile(&self) -> AttackProfile {
        AttackProfile {
            anchor: Vec2::from(self.anchor),
            half_extents: Vec2::from(self.half_extents),
            recoil_axis: match self.recoil_axis {
                RecoilAxisDef::X => RecoilAxis::X,
                RecoilAxisDef::Y => RecoilAxis::Y,
            },
            recoil_speed: self.recoil_speed,
            effect_angle: self.effect_angle,
        }
    }
}

impl HitStopRequestDef {
    fn to_request(self) -> HitStopRequest {
        HitStopRequest {
            target_scale: self.target_scale,
            restore_speed: self.restore_speed,
            delay: self.delay,
        }
    }
}
