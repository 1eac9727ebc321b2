//! Content domain: controller tuning loaded from RON.

mod data;
mod loader;
#[cfg(test)]
mod tests;
mod validation;

pub use data::{
    AttackProfileDef, AttacksDef, CombatDef, ControllerDef, DashDef, HitStopDef,
    HitStopRequestDef, MovementDef, RecoilAxisDef, RecoilDef, WallJumpDef,
};
pub use loader::{ContentLoadError, load_controller_def, parse_controller_def};
pub use validation::{ValidationError, validate_controller_def};

use bevy::prelude::*;
use std::path::Path;

pub const CONTROLLER_CONFIG_PATH: &str = "assets/data/controller.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<ControllerDef>()
            .add_systems(PreStartup, load_controller_config);
    }
}

/// Overwrites the tuning resources from the controller file. A missing or
/// broken file leaves the defaults in place.
fn load_controller_config(mut commands: Commands) {
    let def = match load_controller_def(Path::new(CONTROLLER_CONFIG_PATH)) {
        Ok(def) => def,
        Err(e) => {
            warn!("{}; using default controller tuning", e);
            return;
        }
    };

    #[cfg(feature = "dev-tools")]
    for error in validate_controller_def(&def) {
        warn!("Controller config: {}", error);
    }

    commands.insert_resource(def.movement_tuning());
    commands.insert_resource(def.attack_tuning());
    commands.insert_resource(def.recoil_tuning());
    commands.insert_resource(def.combat_tuning());
    commands.insert_resource(def.hit_stop_tuning());

    info!(
        "Loaded controller config (schema v{}) from {}",
        def.schema_version, CONTROLLER_CONFIG_PATH
    );
}
