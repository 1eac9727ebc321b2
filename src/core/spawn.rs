//! Core domain: player and practice arena spawning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{Damageable, Health, Invincible, RecoilState};
use crate::feedback::AnimationPlayback;
use crate::movement::{
    ControllerState, GameLayer, Ground, MovementTuning, Player, SurfaceContact, SurfaceProbes,
    Wall,
};

const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);
/// Gravity scale the controller treats as "normal"; dash and recoil return to it.
const PLAYER_GRAVITY_SCALE: f32 = 1.0;

pub(crate) fn spawn_player(mut commands: Commands, tuning: Res<MovementTuning>) {
    info!(
        "Spawning player: move_speed={}, jump_power={}, dash_power={}",
        tuning.move_speed, tuning.jump_power, tuning.dash_power
    );

    commands.spawn((
        // Identity & Controller
        (
            Player,
            ControllerState::new(tuning.move_speed, PLAYER_GRAVITY_SCALE),
            SurfaceContact::default(),
            SurfaceProbes {
                ground_anchor: Vec2::new(0.0, -PLAYER_SIZE.y / 2.0),
                ground_radius: tuning.ground_probe_radius,
                wall_anchor: Vec2::new(PLAYER_SIZE.x / 2.0 + 2.0, 0.0),
                wall_radius: tuning.wall_probe_radius,
            },
            RecoilState::default(),
            Invincible::default(),
            AnimationPlayback::default(),
        ),
        // Rendering
        Sprite {
            color: Color::WHITE,
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, -100.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(PLAYER_GRAVITY_SCALE),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));
}

pub(crate) fn spawn_practice_arena(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);
    let dummy_color = Color::srgb(0.8, 0.3, 0.3);

    let ground_layers = CollisionLayers::new(
        GameLayer::Ground,
        [GameLayer::Player, GameLayer::Attackable],
    );
    let wall_layers = CollisionLayers::new(
        GameLayer::Wall,
        [GameLayer::Player, GameLayer::Attackable],
    );

    let slabs = [
        // Floor
        (Vec2::new(0.0, -200.0), Vec2::new(800.0, 40.0), true),
        // Outer walls
        (Vec2::new(-420.0, 50.0), Vec2::new(40.0, 500.0), false),
        (Vec2::new(420.0, 50.0), Vec2::new(40.0, 500.0), false),
        // Platforms
        (Vec2::new(-250.0, -50.0), Vec2::new(150.0, 20.0), true),
        (Vec2::new(250.0, 50.0), Vec2::new(150.0, 20.0), true),
        // Pillar for wall jumping practice
        (Vec2::new(-100.0, -80.0), Vec2::new(30.0, 200.0), false),
    ];

    for (position, size, is_ground) in slabs {
        let mut entity = commands.spawn((
            Sprite {
                color: if !is_ground {
                    wall_color
                } else if size.x > 400.0 {
                    ground_color
                } else {
                    platform_color
                },
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
        ));
        if is_ground {
            entity.insert((Ground, ground_layers));
        } else {
            entity.insert((Wall, wall_layers));
        }
    }

    // Training dummies
    for x in [150.0, 250.0] {
        commands.spawn((
            Damageable,
            Health::new(5.0),
            Sprite {
                color: dummy_color,
                custom_size: Some(Vec2::splat(32.0)),
                ..default()
            },
            Transform::from_xyz(x, -160.0, 0.0),
            RigidBody::Dynamic,
            Collider::rectangle(32.0, 32.0),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            LinearDamping(3.0),
            CollisionLayers::new(GameLayer::Attackable, [GameLayer::Ground, GameLayer::Wall]),
        ));
    }
}
