//! Hit-stop domain: which gameplay moments trigger a hit-stop.

use bevy::prelude::*;

use crate::hitstop::HitStopRequest;

#[derive(Resource, Debug, Clone)]
pub struct HitStopTuning {
    /// Requested when a player attack connects.
    pub on_hit: Option<HitStopRequest>,
    /// Requested when the player takes damage.
    pub on_damaged: Option<HitStopRequest>,
}

impl Default for HitStopTuning {
    fn default() -> Self {
        Self {
            on_hit: None,
            on_damaged: Some(HitStopRequest {
                target_scale: 0.1,
                restore_speed: 5.0,
                delay: 0.5,
            }),
        }
    }
}
