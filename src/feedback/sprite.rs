//! Sprite presentation: facing mirror and invincibility flash.

use bevy::prelude::*;

use crate::combat::{CombatTuning, Invincible};
use crate::movement::{ControllerState, Facing, Player};

/// Grey level for the invincibility flash at `elapsed` seconds: ping-pongs
/// between 1 (white) and 0 (black).
pub fn hit_flash_tint(elapsed: f32, flash_speed: f32) -> f32 {
    let t = (elapsed * flash_speed).rem_euclid(2.0);
    let ping_pong = if t > 1.0 { 2.0 - t } else { t };
    1.0 - ping_pong
}

pub(crate) fn sync_sprite_facing(mut query: Query<(&ControllerState, &mut Sprite), With<Player>>) {
    for (state, mut sprite) in &mut query {
        let flip = state.facing == Facing::Left;
        if sprite.flip_x != flip {
            sprite.flip_x = flip;
        }
    }
}

pub(crate) fn flash_while_invincible(
    time: Res<Time>,
    tuning: Res<CombatTuning>,
    mut query: Query<(&Invincible, &mut Sprite), With<Player>>,
) {
    for (invincible, mut sprite) in &mut query {
        sprite.color = if invincible.is_active() {
            let level = hit_flash_tint(time.elapsed_secs(), tuning.hit_flash_speed);
            Color::srgb(level, level, level)
        } else {
            Color::WHITE
        };
    }
}
