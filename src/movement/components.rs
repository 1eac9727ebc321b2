//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::timers::{Countdown, DashSequence};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
    /// Anything the player's melee strikes can hit
    Attackable,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

/// External status: while present, move speed and animation playback are scaled down.
#[derive(Component, Debug)]
pub struct Slowed;

/// While present the body is frozen in place and the controller ignores input.
#[derive(Component, Debug)]
pub struct InputLocked;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }
}

/// Overlap probe anchors, relative to the body origin. The wall anchor is
/// mirrored horizontally with facing.
#[derive(Component, Debug, Clone)]
pub struct SurfaceProbes {
    pub ground_anchor: Vec2,
    pub ground_radius: f32,
    pub wall_anchor: Vec2,
    pub wall_radius: f32,
}

impl SurfaceProbes {
    pub fn ground_point(&self, origin: Vec2) -> Vec2 {
        origin + self.ground_anchor
    }

    pub fn wall_point(&self, origin: Vec2, facing: Facing) -> Vec2 {
        origin + Vec2::new(self.wall_anchor.x * facing.sign(), self.wall_anchor.y)
    }
}

/// Surface contact measured this tick. Never carried forward: the sense
/// step overwrites it before locomotion runs.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SurfaceContact {
    pub grounded: bool,
    pub walled: bool,
}

/// Locomotion state owned and mutated only by the controller.
#[derive(Component, Debug, Clone)]
pub struct ControllerState {
    pub facing: Facing,
    pub can_double_jump: bool,
    pub can_dash: bool,
    pub is_wall_sliding: bool,
    /// Positive while a wall jump may still be started.
    pub wall_jump_counter: f32,
    pub wall_jump_direction: Facing,
    /// Post-wall-jump window that suppresses flipping, steering and animation updates.
    pub wall_jump_lock: Countdown,
    pub dash: DashSequence,
    pub time_since_dash: f32,
    pub move_speed: f32,
    /// Gravity scale captured at spawn; dash and recoil restore to it.
    pub baseline_gravity: f32,
}

impl ControllerState {
    pub fn new(move_speed: f32, baseline_gravity: f32) -> Self {
        Self {
            facing: Facing::Right,
            can_double_jump: false,
            can_dash: true,
            is_wall_sliding: false,
            wall_jump_counter: 0.0,
            wall_jump_direction: Facing::Left,
            wall_jump_lock: Countdown::default(),
            dash: DashSequence::default(),
            // Indicator starts full
            time_since_dash: 1.0,
            move_speed,
            baseline_gravity,
        }
    }

    pub fn is_dashing(&self) -> bool {
        self.dash.is_active()
    }

    pub fn is_wall_jumping(&self) -> bool {
        self.wall_jump_lock.is_running()
    }

    /// Fill amount for a dash cooldown indicator, in [0, 1].
    pub fn dash_cooldown_fraction(&self, dash_cooldown: f32) -> f32 {
        if self.time_since_dash == 0.0 || dash_cooldown <= 0.0 {
            return 0.0;
        }
        (self.time_since_dash / dash_cooldown).clamp(0.0, 1.0)
    }

    /// Grants the extra air actions earned by landing a hit.
    pub fn refresh_air_actions(&mut self) {
        self.can_double_jump = true;
        self.can_dash = true;
        self.time_since_dash += 1.0;
    }
}
