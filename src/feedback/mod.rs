//! Feedback domain: sinks for presentation collaborators (audio, animation, sprite tint, dash indicator).

mod animation;
mod audio;
mod indicator;
mod sprite;
#[cfg(test)]
mod tests;

pub use animation::AnimationPlayback;
pub use audio::AudioCue;
pub use indicator::DashIndicator;
pub use sprite::hit_flash_tint;

use bevy::prelude::*;

use crate::core::ControllerStep;
use crate::feedback::audio::play_audio_cues;
use crate::feedback::indicator::update_dash_indicator;
use crate::feedback::sprite::{flash_while_invincible, sync_sprite_facing};

pub struct FeedbackPlugin;

impl Plugin for FeedbackPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AudioCue>()
            .init_resource::<DashIndicator>()
            .add_systems(
                Update,
                (
                    play_audio_cues,
                    sync_sprite_facing,
                    flash_while_invincible,
                    update_dash_indicator,
                )
                    .in_set(ControllerStep::Present),
            );
    }
}
