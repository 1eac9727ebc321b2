use bevy::prelude::*;

use super::indicator::update_dash_indicator;
use super::*;
use crate::movement::{AnimationState, ControllerState, MovementCue, MovementTuning, Player};

#[test]
fn test_flash_ping_pongs_between_white_and_black() {
    assert_eq!(hit_flash_tint(0.0, 4.0), 1.0);
    assert_eq!(hit_flash_tint(0.125, 4.0), 0.5);
    assert_eq!(hit_flash_tint(0.25, 4.0), 0.0);
    assert_eq!(hit_flash_tint(0.375, 4.0), 0.5);
    assert_eq!(hit_flash_tint(0.5, 4.0), 1.0);
}

#[test]
fn test_playback_reports_state_changes() {
    let mut playback = AnimationPlayback::default();

    assert!(!playback.set(AnimationState::Idle, 1.0));
    assert!(playback.set(AnimationState::Jumping, 0.45));
    assert_eq!(playback.state, AnimationState::Jumping);
    assert_eq!(playback.code(), 3);
    assert_eq!(playback.speed, 0.45);

    // Speed still updates when the state holds
    assert!(!playback.set(AnimationState::Jumping, 1.0));
    assert_eq!(playback.speed, 1.0);
}

#[test]
fn test_movement_cues_map_to_audio() {
    assert_eq!(AudioCue::from(MovementCue::Jump), AudioCue::Jump);
    assert_eq!(AudioCue::from(MovementCue::DoubleJump), AudioCue::DoubleJump);
    assert_eq!(AudioCue::from(MovementCue::WallJump), AudioCue::WallJump);
    assert_eq!(AudioCue::from(MovementCue::Dash), AudioCue::Dash);
}

#[test]
fn test_dash_indicator_tracks_player_cooldown() {
    let mut world = World::new();
    world.insert_resource(MovementTuning {
        dash_cooldown: 0.5,
        ..default()
    });
    world.init_resource::<DashIndicator>();
    let mut state = ControllerState::new(320.0, 1.0);
    state.time_since_dash = 0.25;
    world.spawn((Player, state));

    assert_eq!(world.resource::<DashIndicator>().fill, 1.0);
    let mut present = Schedule::new(Update);
    present.add_systems(update_dash_indicator);
    present.run(&mut world);
    assert_eq!(world.resource::<DashIndicator>().fill, 0.5);
}
