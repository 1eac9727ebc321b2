//! Hit-stop domain: drives `Time<Virtual>` from the hit-stop clock.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::hitstop::{HitStop, HitStopRequest};

pub(crate) fn advance_hit_stop(
    real_time: Res<Time<Real>>,
    mut virtual_time: ResMut<Time<Virtual>>,
    mut hit_stop: ResMut<HitStop>,
    mut requests: MessageReader<HitStopRequest>,
) {
    // Only the latest request this frame matters
    if let Some(request) = requests.read().last() {
        hit_stop.request(*request);
        debug!(
            "Hit-stop: scale {} restore {}/s after {}s",
            request.target_scale, request.restore_speed, request.delay
        );
    } else {
        let was_active = !hit_stop.is_idle();
        hit_stop.tick(real_time.delta_secs());
        if was_active && hit_stop.is_idle() {
            debug!("Hit-stop restored to normal speed");
        }
    }

    if virtual_time.relative_speed() != hit_stop.scale() {
        virtual_time.set_relative_speed(hit_stop.scale());
    }
}
