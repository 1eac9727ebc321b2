//! Combat domain: attack profiles and direction selection.

use bevy::prelude::*;

use crate::movement::Facing;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackKind {
    Side,
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoilAxis {
    X,
    Y,
}

/// Static description of one directional strike.
#[derive(Debug, Clone, PartialEq)]
pub struct AttackProfile {
    /// Centre of the hit region relative to the attacker, authored facing right.
    pub anchor: Vec2,
    pub half_extents: Vec2,
    pub recoil_axis: RecoilAxis,
    /// Strength handed to struck targets.
    pub recoil_speed: f32,
    /// Rotation of the slash effect, in degrees.
    pub effect_angle: f32,
}

impl AttackProfile {
    /// World-space centre of the hit region.
    pub fn region_center(&self, origin: Vec2, facing: Facing) -> Vec2 {
        origin + Vec2::new(self.anchor.x * facing.sign(), self.anchor.y)
    }
}

/// Pick the attack for this tick's vertical input.
///
/// Side needs neutral vertical input, Up needs positive input regardless of
/// grounding, Down needs negative input and is only available airborne.
pub fn select_attack(vertical: i8, grounded: bool) -> Option<AttackKind> {
    match vertical {
        0 => Some(AttackKind::Side),
        v if v > 0 => Some(AttackKind::Up),
        _ if !grounded => Some(AttackKind::Down),
        _ => None,
    }
}
