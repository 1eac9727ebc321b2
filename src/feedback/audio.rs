//! Fire-and-forget audio triggers.

use bevy::ecs::message::{Message, MessageReader};
use bevy::prelude::*;

use crate::movement::MovementCue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    Jump,
    DoubleJump,
    WallJump,
    Dash,
    Attack,
}

impl Message for AudioCue {}

impl From<MovementCue> for AudioCue {
    fn from(cue: MovementCue) -> Self {
        match cue {
            MovementCue::Jump => AudioCue::Jump,
            MovementCue::DoubleJump => AudioCue::DoubleJump,
            MovementCue::WallJump => AudioCue::WallJump,
            MovementCue::Dash => AudioCue::Dash,
        }
    }
}

/// Audio playback is an external collaborator; this only traces what would play.
pub(crate) fn play_audio_cues(mut cues: MessageReader<AudioCue>) {
    for cue in cues.read() {
        debug!("Audio cue: {:?}", cue);
    }
}
