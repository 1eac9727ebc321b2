//! Range checks for controller tuning values.
//!
//! Nothing here gates the game at runtime. The checks are run by the test
//! suite and, with `dev-tools`, reported at load.

use super::data::*;

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub value: f32,
    pub expected: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "'{}' is {} but must be {}",
            self.field, self.value, self.expected
        )
    }
}

/// Helper macro for checking a value against a predicate
macro_rules! check_range {
    ($errors:expr, $field:expr, $value:expr, $ok:ident, $expected:expr) => {
        let value = $value;
        if !$ok(value) {
            $errors.push(ValidationError {
                field: $field,
                value,
                expected: $expected,
            });
        }
    };
}

fn positive(v: f32) -> bool {
    v > 0.0
}

fn non_negative(v: f32) -> bool {
    v >= 0.0
}

fn unit_interval(v: f32) -> bool {
    v > 0.0 && v <= 1.0
}

const POSITIVE: &str = "> 0";
const NON_NEGATIVE: &str = ">= 0";
const UNIT: &str = "in (0, 1]";

/// Validate every tuning value in a controller definition.
/// Returns a list of validation errors, empty if all values are in range.
pub fn validate_controller_def(def: &ControllerDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // Movement
    let m = &def.movement;
    check_range!(errors, "movement.move_speed", m.move_speed, positive, POSITIVE);
    check_range!(errors, "movement.jump_power", m.jump_power, positive, POSITIVE);
    check_range!(
        errors,
        "movement.wall_slide_speed",
        m.wall_slide_speed,
        non_negative,
        NON_NEGATIVE
    );
    check_range!(
        errors,
        "movement.ground_probe_radius",
        m.ground_probe_radius,
        positive,
        POSITIVE
    );
    check_range!(
        errors,
        "movement.wall_probe_radius",
        m.wall_probe_radius,
        positive,
        POSITIVE
    );
    check_range!(errors, "movement.slow_ratio", m.slow_ratio, unit_interval, UNIT);

    // Wall jump
    let w = &def.wall_jump;
    check_range!(errors, "wall_jump.power.x", w.power.0, non_negative, NON_NEGATIVE);
    check_range!(errors, "wall_jump.power.y", w.power.1, positive, POSITIVE);
    check_range!(errors, "wall_jump.window", w.window, non_negative, NON_NEGATIVE);
    check_range!(errors, "wall_jump.duration", w.duration, non_negative, NON_NEGATIVE);

    // Dash
    let d = &def.dash;
    check_range!(errors, "dash.power", d.power, positive, POSITIVE);
    check_range!(errors, "dash.duration", d.duration, non_negative, NON_NEGATIVE);
    check_range!(errors, "dash.cooldown", d.cooldown, non_negative, NON_NEGATIVE);

    // Attacks
    check_range!(errors, "attacks.damage", def.attacks.damage, positive, POSITIVE);
    for (name, profile) in [
        ("attacks.side", &def.attacks.side),
        ("attacks.up", &def.attacks.up),
        ("attacks.down", &def.attacks.down),
    ] {
        let (hx, hy) = profile.half_extents;
        if !(positive(hx) && positive(hy)) {
            errors.push(ValidationError {
                field: name,
                value: hx.min(hy),
                expected: "a hit region with positive half extents",
            });
        }
        if !non_negative(profile.recoil_speed) {
            errors.push(ValidationError {
                field: name,
                value: profile.recoil_speed,
                expected: "a recoil speed >= 0",
            });
        }
    }

    // Recoil
    let r = &def.recoil;
    check_range!(errors, "recoil.x_steps", r.x_steps as f32, positive, POSITIVE);
    check_range!(errors, "recoil.y_steps", r.y_steps as f32, positive, POSITIVE);
    check_range!(errors, "recoil.x_speed", r.x_speed, non_negative, NON_NEGATIVE);
    check_range!(errors, "recoil.y_speed", r.y_speed, non_negative, NON_NEGATIVE);

    // Combat feedback
    let c = &def.combat;
    check_range!(
        errors,
        "combat.iframes_duration",
        c.iframes_duration,
        non_negative,
        NON_NEGATIVE
    );
    check_range!(
        errors,
        "combat.hit_flash_speed",
        c.hit_flash_speed,
        positive,
        POSITIVE
    );
    check_range!(
        errors,
        "combat.effect_duration",
        c.effect_duration,
        non_negative,
        NON_NEGATIVE
    );

    // Hit-stop
    for (prefix, request) in [
        ("hit_stop.on_hit", def.hit_stop.on_hit),
        ("hit_stop.on_damaged", def.hit_stop.on_damaged),
    ] {
        let Some(request) = request else {
            continue;
        };
        validate_hit_stop_request(&mut errors, prefix, &request);
    }

    errors
}

fn validate_hit_stop_request(
    errors: &mut Vec<ValidationError>,
    prefix: &'static str,
    request: &HitStopRequestDef,
) {
    if !unit_interval(request.target_scale) {
        errors.push(ValidationError {
            field: prefix,
            value: request.target_scale,
            expected: "a target_scale in (0, 1]",
        });
    }
    if !positive(request.restore_speed) {
        errors.push(ValidationError {
            field: prefix,
            value: request.restore_speed,
            expected: "a restore_speed > 0",
        });
    }
    if !non_negative(request.delay) {
        errors.push(ValidationError {
            field: prefix,
            value: request.delay,
            expected: "a delay >= 0",
        });
    }
}
