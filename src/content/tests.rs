//! Content domain: tests for loading and validating controller tuning.

use std::path::Path;

use super::*;
use crate::combat::{AttackTuning, CombatTuning, RecoilAxis, RecoilTuning};
use crate::hitstop::HitStopTuning;
use crate::movement::MovementTuning;

fn shipped_def() -> ControllerDef {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(CONTROLLER_CONFIG_PATH);
    match load_controller_def(&path) {
        Ok(def) => def,
        Err(e) => panic!("{}", e),
    }
}

// -----------------------------------------------------------------------------
// Loading
// -----------------------------------------------------------------------------

#[test]
fn test_shipped_config_loads() {
    let def = shipped_def();
    assert_eq!(def.schema_version, 1);
}

#[test]
fn test_shipped_config_is_valid() {
    let errors = validate_controller_def(&shipped_def());
    for error in &errors {
        eprintln!("{}", error);
    }
    assert!(errors.is_empty());
}

#[test]
fn test_shipped_config_matches_defaults() {
    let def = shipped_def();

    let movement = def.movement_tuning();
    let defaults = MovementTuning::default();
    assert_eq!(movement.move_speed, defaults.move_speed);
    assert_eq!(movement.jump_power, defaults.jump_power);
    assert_eq!(movement.wall_slide_speed, defaults.wall_slide_speed);
    assert_eq!(movement.wall_jump_power, defaults.wall_jump_power);
    assert_eq!(movement.wall_jump_window, defaults.wall_jump_window);
    assert_eq!(movement.wall_jump_duration, defaults.wall_jump_duration);
    assert_eq!(movement.dash_power, defaults.dash_power);
    assert_eq!(movement.dash_duration, defaults.dash_duration);
    assert_eq!(movement.dash_cooldown, defaults.dash_cooldown);
    assert_eq!(movement.slow_ratio, defaults.slow_ratio);

    let attacks = def.attack_tuning();
    let attack_defaults = AttackTuning::default();
    assert_eq!(attacks.damage, attack_defaults.damage);
    assert_eq!(attacks.side.anchor, attack_defaults.side.anchor);
    assert_eq!(attacks.side.recoil_axis, RecoilAxis::X);
    assert_eq!(attacks.up.effect_angle, 80.0);
    assert_eq!(attacks.down.effect_angle, -90.0);
    assert_eq!(attacks.down.recoil_axis, RecoilAxis::Y);

    let recoil = def.recoil_tuning();
    let recoil_defaults = RecoilTuning::default();
    assert_eq!(recoil.x_steps, recoil_defaults.x_steps);
    assert_eq!(recoil.y_steps, recoil_defaults.y_steps);
    assert_eq!(recoil.x_speed, recoil_defaults.x_speed);

    let combat = def.combat_tuning();
    assert_eq!(
        combat.iframes_duration,
        CombatTuning::default().iframes_duration
    );

    let hit_stop = def.hit_stop_tuning();
    let hit_stop_defaults = HitStopTuning::default();
    assert_eq!(hit_stop.on_hit, hit_stop_defaults.on_hit);
    assert_eq!(hit_stop.on_damaged, hit_stop_defaults.on_damaged);
}

#[test]
fn test_missing_file_reports_io_error() {
    let result = load_controller_def(Path::new("does/not/exist.ron"));
    let Err(error) = result else {
        panic!("expected an error for a missing file");
    };
    assert_eq!(error.file, "does/not/exist.ron");
    assert!(error.message.starts_with("IO error"));
}

#[test]
fn test_malformed_file_reports_parse_error() {
    let Err(error) = parse_controller_def("broken.ron", "(schema_version: \"one\")") else {
        panic!("expected a parse error");
    };
    assert!(error.message.starts_with("Parse error"));
    assert!(error.to_string().contains("broken.ron"));
}

#[test]
fn test_hit_stop_delay_defaults_to_zero() {
    let mut def = shipped_def();
    let text = "(target_scale: 0.2, restore_speed: 2.0)";
    let request: HitStopRequestDef = match ron::from_str(text) {
        Ok(request) => request,
        Err(e) => panic!("{}", e),
    };
    assert_eq!(request.delay, 0.0);

    def.hit_stop.on_hit = Some(request);
    let tuning = def.hit_stop_tuning();
    let on_hit = tuning.on_hit.map(|r| (r.target_scale, r.restore_speed, r.delay));
    assert_eq!(on_hit, Some((0.2, 2.0, 0.0)));
}

// -----------------------------------------------------------------------------
// Validation
// -----------------------------------------------------------------------------

#[test]
fn test_negative_durations_are_flagged() {
    let mut def = shipped_def();
    def.dash.duration = -0.1;
    def.wall_jump.window = -1.0;

    let errors = validate_controller_def(&def);
    let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["wall_jump.window", "dash.duration"]);
}

#[test]
fn test_zero_recoil_steps_are_flagged() {
    let mut def = shipped_def();
    def.recoil.y_steps = 0;

    let errors = validate_controller_def(&def);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "recoil.y_steps");
}

#[test]
fn test_hit_stop_requests_are_range_checked() {
    let mut def = shipped_def();
    def.hit_stop.on_hit = Some(HitStopRequestDef {
        target_scale: 1.5,
        restore_speed: 0.0,
        delay: -0.5,
    });

    let errors = validate_controller_def(&def);
    assert_eq!(errors.len(), 3);
    assert!(errors.iter().all(|e| e.field == "hit_stop.on_hit"));
}

#[test]
fn test_slow_ratio_must_be_a_fraction() {
    let mut def = shipped_def();
    def.movement.slow_ratio = 0.0;

    let errors = validate_controller_def(&def);
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].to_string(),
        "'movement.slow_ratio' is 0 but must be in (0, 1]"
    );
}
