//! Combat domain: tuning resources.

use bevy::prelude::*;

use crate::combat::attacks::{AttackKind, AttackProfile, RecoilAxis};

#[derive(Resource, Debug, Clone)]
pub struct AttackTuning {
    pub damage: f32,
    pub side: AttackProfile,
    pub up: AttackProfile,
    pub down: AttackProfile,
}

impl Default for AttackTuning {
    fn default() -> Self {
        Self {
            damage: 1.0,
            side: AttackProfile {
                anchor: Vec2::new(32.0, 0.0),
                half_extents: Vec2::new(24.0, 20.0),
                recoil_axis: RecoilAxis::X,
                recoil_speed: 800.0,
                effect_angle: 0.0,
            },
            up: AttackProfile {
                anchor: Vec2::new(0.0, 40.0),
                half_extents: Vec2::new(20.0, 24.0),
                recoil_axis: RecoilAxis::Y,
                recoil_speed: 800.0,
                effect_angle: 80.0,
            },
            down: AttackProfile {
                anchor: Vec2::new(0.0, -40.0),
                half_extents: Vec2::new(20.0, 24.0),
                recoil_axis: RecoilAxis::Y,
                recoil_speed: 800.0,
                effect_angle: -90.0,
            },
        }
    }
}

impl AttackTuning {
    pub fn profile(&self, kind: AttackKind) -> &AttackProfile {
        match kind {
            AttackKind::Side => &self.side,
            AttackKind::Up => &self.up,
            AttackKind::Down => &self.down,
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct RecoilTuning {
    pub x_steps: u32,
    pub y_steps: u32,
    pub x_speed: f32,
    pub y_speed: f32,
}

impl Default for RecoilTuning {
    fn default() -> Self {
        Self {
            x_steps: 3,
            y_steps: 3,
            x_speed: 800.0,
            y_speed: 800.0,
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct CombatTuning {
    pub iframes_duration: f32,
    /// Ping-pong rate of the invincibility tint.
    pub hit_flash_speed: f32,
    pub effect_duration: f32,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            iframes_duration: 1.0,
            hit_flash_speed: 10.0,
            effect_duration: 0.15,
        }
    }
}
