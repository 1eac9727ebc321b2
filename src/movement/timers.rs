//! Movement domain: resumable timers advanced once per tick.

/// A countdown that can be started, advanced, and cancelled explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Countdown {
    remaining: f32,
}

impl Countdown {
    pub fn start(&mut self, duration: f32) {
        self.remaining = duration.max(0.0);
    }

    pub fn cancel(&mut self) {
        self.remaining = 0.0;
    }

    pub fn is_running(&self) -> bool {
        self.remaining > 0.0
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Advance by `dt`. Returns true only on the tick the countdown expires.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.remaining <= 0.0 {
            return false;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            return true;
        }
        false
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DashPhase {
    #[default]
    Idle,
    /// Dash velocity is being held.
    Active,
    /// Dash finished, token not yet returned.
    Cooldown,
}

/// What changed during a [`DashSequence::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashTransition {
    None,
    /// Active phase ended this tick; gravity must be restored.
    Ended,
    /// Cooldown elapsed this tick; the dash token may be returned.
    Ready,
}

/// Two-phase dash timing: an active window, then a cooldown window that
/// starts when the active window ends.
#[derive(Debug, Clone, Copy, Default)]
pub struct DashSequence {
    phase: DashPhase,
    timer: Countdown,
    cooldown: f32,
}

impl DashSequence {
    pub fn start(&mut self, duration: f32, cooldown: f32) {
        self.phase = DashPhase::Active;
        self.timer.start(duration);
        self.cooldown = cooldown;
    }

    pub fn phase(&self) -> DashPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == DashPhase::Active
    }

    pub fn tick(&mut self, dt: f32) -> DashTransition {
        match self.phase {
            DashPhase::Idle => DashTransition::None,
            DashPhase::Active => {
                if self.timer.tick(dt) || !self.timer.is_running() {
                    self.phase = DashPhase::Cooldown;
                    self.timer.start(self.cooldown);
                    DashTransition::Ended
                } else {
                    DashTransition::None
                }
            }
            DashPhase::Cooldown => {
                if self.timer.tick(dt) || !self.timer.is_running() {
                    self.phase = DashPhase::Idle;
                    DashTransition::Ready
                } else {
                    DashTransition::None
                }
            }
        }
    }
}
