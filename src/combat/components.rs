//! Combat domain: components for recoil, damageable targets and effects.

use bevy::prelude::*;

use crate::movement::Countdown;

/// Per-axis recoil shared between combat (writer) and locomotion (reader).
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct RecoilState {
    pub recoiling_x: bool,
    pub recoiling_y: bool,
    pub steps_x: u32,
    pub steps_y: u32,
    /// Direction of the Y recoil, fixed when it was armed.
    pub upward_y: bool,
}

impl RecoilState {
    pub fn stop_x(&mut self) {
        self.recoiling_x = false;
        self.steps_x = 0;
    }

    pub fn stop_y(&mut self) {
        self.recoiling_y = false;
        self.steps_y = 0;
    }

    pub fn is_recoiling(&self) -> bool {
        self.recoiling_x || self.recoiling_y
    }
}

/// Marks an entity the player's strikes can damage.
#[derive(Component, Debug)]
pub struct Damageable;

/// Health component for damageable entities
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: f32,
}

impl Health {
    pub fn new(current: f32) -> Self {
        Self { current }
    }

    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let actual = amount.min(self.current);
        self.current -= actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }
}

/// Invulnerability window after the player takes damage.
#[derive(Component, Debug, Default)]
pub struct Invincible {
    pub timer: Countdown,
}

impl Invincible {
    pub fn is_active(&self) -> bool {
        self.timer.is_running()
    }
}

/// Lifetime for short-lived cosmetic entities such as slash effects.
#[derive(Component, Debug)]
pub struct EffectLifetime(pub f32);
