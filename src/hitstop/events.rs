//! Hit-stop domain: requests to change the global time-scale.

use bevy::ecs::message::Message;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitStopRequest {
    /// Time-scale applied immediately.
    pub target_scale: f32,
    /// Scale units regained per real-time second once restoration starts.
    pub restore_speed: f32,
    /// Real-time seconds to hold the target scale before restoring.
    pub delay: f32,
}

impl Message for HitStopRequest {}
