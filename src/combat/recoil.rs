//! Combat domain: per-tick recoil velocity override.

use crate::combat::components::RecoilState;
use crate::combat::resources::RecoilTuning;
use crate::movement::{BodyState, Facing};

/// Apply recoil for one tick. Must run after locomotion has written the body.
///
/// X recoil pushes away from where the character is looking. Y recoil
/// suspends gravity; otherwise gravity returns to baseline (zero while a
/// dash holds it). Landing ends Y recoil immediately.
pub fn apply_recoil(
    recoil: &mut RecoilState,
    tuning: &RecoilTuning,
    facing: Facing,
    grounded: bool,
    dashing: bool,
    baseline_gravity: f32,
    body: &mut BodyState,
) {
    if recoil.recoiling_x {
        body.velocity.x = -facing.sign() * tuning.x_speed;
    }

    if recoil.recoiling_y {
        body.gravity_scale = 0.0;
        body.velocity.y = if recoil.upward_y {
            tuning.y_speed
        } else {
            -tuning.y_speed
        };
    } else {
        body.gravity_scale = if dashing { 0.0 } else { baseline_gravity };
    }

    if recoil.recoiling_x {
        recoil.steps_x += 1;
        if recoil.steps_x >= tuning.x_steps {
            recoil.stop_x();
        }
    }

    if recoil.recoiling_y {
        recoil.steps_y += 1;
        if recoil.steps_y >= tuning.y_steps {
            recoil.stop_y();
        }
    }

    if grounded {
        recoil.stop_y();
    }
}
