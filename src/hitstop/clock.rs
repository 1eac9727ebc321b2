//! Hit-stop domain: the single process-wide time-scale and its restoration.

use bevy::prelude::*;

use crate::hitstop::HitStopRequest;
use crate::movement::Countdown;

/// Owns the effective time-scale. Only the hit-stop system writes it to
/// `Time<Virtual>`.
#[derive(Resource, Debug, Clone)]
pub struct HitStop {
    scale: f32,
    restore_speed: f32,
    restoring: bool,
    pending: Countdown,
}

impl Default for HitStop {
    fn default() -> Self {
        Self {
            scale: 1.0,
            restore_speed: 0.0,
            restoring: false,
            pending: Countdown::default(),
        }
    }
}

impl HitStop {
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn is_restoring(&self) -> bool {
        self.restoring
    }

    pub fn has_pending_restore(&self) -> bool {
        self.pending.is_running()
    }

    pub fn is_idle(&self) -> bool {
        !self.restoring && !self.pending.is_running()
    }

    /// Apply a request. The newest request always wins: its scale replaces
    /// the current one and any pending delayed restoration is cancelled.
    pub fn request(&mut self, request: HitStopRequest) {
        self.scale = request.target_scale;
        self.restore_speed = request.restore_speed;
        self.pending.cancel();

        if request.delay > 0.0 {
            self.restoring = false;
            self.pending.start(request.delay);
        } else {
            self.restoring = true;
        }
    }

    /// Advance by unscaled elapsed time.
    pub fn tick(&mut self, real_dt: f32) {
        if self.pending.tick(real_dt) {
            self.restoring = true;
        }

        if !self.restoring {
            return;
        }

        if self.scale < 1.0 {
            self.scale = (self.scale + self.restore_speed * real_dt).min(1.0);
        }
        if self.scale >= 1.0 {
            self.scale = 1.0;
            self.restoring = false;
        }
    }
}
