//! Debug hotkeys for poking at controller states by hand.
//!
//! - Ctrl+H: damage the player (invincibility, flash, hit-stop)
//! - Ctrl+O: toggle `Slowed`
//! - Ctrl+L: toggle `InputLocked`

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::combat::PlayerDamaged;
use crate::core::ControllerStep;
use crate::movement::{InputLocked, Player, Slowed, bound_keys};


const DAMAGE_KEY: KeyCode = KeyCode::KeyH;
const SLOW_KEY: KeyCode = KeyCode::KeyO;
const LOCK_KEY: KeyCode = KeyCode::KeyL;
const HOTKEYS: [KeyCode; 3] = [DAMAGE_KEY, SLOW_KEY, LOCK_KEY];

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        if let Some(key) = bound_keys().find(|key| HOTKEYS.contains(key)) {
            warn!("[DEBUG] {:?} is also a controller key", key);
        }
        app.add_systems(Update, handle_debug_hotkeys.in_set(ControllerStep::Input));
    }
}

fn handle_debug_hotkeys(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut damaged: MessageWriter<PlayerDamaged>,
    player_query: Query<(Entity, Has<Slowed>, Has<InputLocked>), With<Player>>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl || !keyboard.any_just_pressed(HOTKEYS) {
        return;
    }

    for (player, slowed, locked) in &player_query {
        if keyboard.just_pressed(DAMAGE_KEY) {
            damaged.write(PlayerDamaged { player, amount: 1.0 });
            info!("[DEBUG] Damaged player");
        }

        if keyboard.just_pressed(SLOW_KEY) {
            if slowed {
                commands.entity(player).remove::<Slowed>();
            } else {
                commands.entity(player).insert(Slowed);
            }
            info!("[DEBUG] Slowed {}", if slowed { "OFF" } else { "ON" });
        }

        if keyboard.just_pressed(LOCK_KEY) {
            if locked {
                commands.entity(player).remove::<InputLocked>();
            } else {
                commands.entity(player).insert(InputLocked);
            }
            info!("[DEBUG] Input lock {}", if locked { "OFF" } else { "ON" });
        }
    }
}
