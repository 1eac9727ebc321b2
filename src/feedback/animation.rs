//! Animation player input: a state code plus a playback-speed multiplier.

use bevy::prelude::*;

use crate::movement::AnimationState;

#[derive(Component, Debug, Clone)]
pub struct AnimationPlayback {
    pub state: AnimationState,
    pub speed: f32,
}

impl Default for AnimationPlayback {
    fn default() -> Self {
        Self {
            state: AnimationState::Idle,
            speed: 1.0,
        }
    }
}

impl AnimationPlayback {
    /// Returns true when the state changed.
    pub fn set(&mut self, state: AnimationState, speed: f32) -> bool {
        self.speed = speed;
        if self.state == state {
            return false;
        }
        self.state = state;
        true
    }

    pub fn code(&self) -> i32 {
        self.state.code()
    }
}
