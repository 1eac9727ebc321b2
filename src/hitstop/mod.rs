//! Hit-stop domain: global slow-motion with timed restoration.

mod clock;
mod events;
mod resources;
mod systems;
#[cfg(test)]
mod tests;

pub use clock::HitStop;
pub use events::HitStopRequest;
pub use resources::HitStopTuning;

use bevy::prelude::*;

use crate::core::ControllerStep;
use crate::hitstop::systems::advance_hit_stop;

pub struct HitStopPlugin;

impl Plugin for HitStopPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HitStop>()
            .init_resource::<HitStopTuning>()
            .add_message::<HitStopRequest>()
            .add_systems(Update, advance_hit_stop.in_set(ControllerStep::TimeScale));
    }
}
