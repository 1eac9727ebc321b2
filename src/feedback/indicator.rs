//! Dash cooldown indicator fill, read by the HUD.

use bevy::prelude::*;

use crate::movement::{ControllerState, MovementTuning, Player};

/// Fill in [0, 1]; 1 means the dash has fully recharged.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct DashIndicator {
    pub fill: f32,
}

impl Default for DashIndicator {
    fn default() -> Self {
        Self { fill: 1.0 }
    }
}

pub(crate) fn update_dash_indicator(
    tuning: Res<MovementTuning>,
    mut indicator: ResMut<DashIndicator>,
    query: Query<&ControllerState, With<Player>>,
) {
    for state in &query {
        let fill = state.dash_cooldown_fraction(tuning.dash_cooldown);
        if indicator.fill != fill {
            indicator.fill = fill;
        }
    }
}
