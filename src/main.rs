mod combat;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod feedback;
mod hitstop;
mod movement;

use avian2d::prelude::*;
use bevy::prelude::*;

/// World gravity in pixels per second squared.
const WORLD_GRAVITY: f32 = 1800.0;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Wallblade".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .insert_resource(Gravity(Vec2::NEG_Y * WORLD_GRAVITY))
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        movement::MovementPlugin,
        combat::CombatPlugin,
        hitstop::HitStopPlugin,
        feedback::FeedbackPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
