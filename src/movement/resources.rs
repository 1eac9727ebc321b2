//! Movement domain: tuning and input resources.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub move_speed: f32,
    pub jump_power: f32,
    pub wall_slide_speed: f32,
    /// Horizontal and vertical launch speed of a wall jump.
    pub wall_jump_power: Vec2,
    /// How long after leaving a wall slide a wall jump is still accepted.
    pub wall_jump_window: f32,
    /// How long steering, flipping and animation updates stay suppressed after a wall jump.
    pub wall_jump_duration: f32,
    pub dash_power: f32,
    pub dash_duration: f32,
    pub dash_cooldown: f32,
    pub ground_probe_radius: f32,
    pub wall_probe_radius: f32,
    /// Multiplier applied to move speed and animation speed while slowed.
    pub slow_ratio: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 320.0,
            jump_power: 672.0,
            wall_slide_speed: 96.0,
            wall_jump_power: Vec2::new(320.0, 640.0),
            wall_jump_window: 0.2,
            wall_jump_duration: 0.4,
            dash_power: 768.0,
            dash_duration: 0.2,
            dash_cooldown: 0.75,
            ground_probe_radius: 6.0,
            wall_probe_radius: 3.0,
            slow_ratio: 0.45,
        }
    }
}

impl MovementTuning {
    pub fn effective_move_speed(&self, slowed: bool) -> f32 {
        if slowed {
            self.move_speed * self.slow_ratio
        } else {
            self.move_speed
        }
    }

    pub fn animation_speed(&self, slowed: bool) -> f32 {
        if slowed { self.slow_ratio } else { 1.0 }
    }
}

/// Logical actions, sampled every frame and consumed by the fixed step.
#[derive(Resource, Debug, Default, Clone)]
pub struct ControllerInput {
    /// Held axes in [-1, 1].
    pub axis: Vec2,
    pub jump_pressed: bool,
    pub jump_released: bool,
    pub dash_pressed: bool,
    pub attack_pressed: bool,
}

impl ControllerInput {
    pub fn horizontal(&self) -> i8 {
        crate::movement::axis_sign(self.axis.x)
    }

    pub fn vertical(&self) -> i8 {
        crate::movement::axis_sign(self.axis.y)
    }

    /// Fold a frame's sample in. Axes follow the latest sample; edges stay
    /// set until a fixed step has consumed them.
    pub fn latch(&mut self, sample: &ControllerInput) {
        self.axis = sample.axis;
        self.jump_pressed |= sample.jump_pressed;
        self.jump_released |= sample.jump_released;
        self.dash_pressed |= sample.dash_pressed;
        self.attack_pressed |= sample.attack_pressed;
    }

    pub fn clear_edges(&mut self) {
        self.jump_pressed = false;
        self.jump_released = false;
        self.dash_pressed = false;
        self.attack_pressed = false;
    }
}
