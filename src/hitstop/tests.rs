//! Hit-stop domain: tests for time-scale requests and restoration.

use super::*;

const REAL_DT: f32 = 0.125;

fn request(target_scale: f32, restore_speed: f32, delay: f32) -> HitStopRequest {
    HitStopRequest {
        target_scale,
        restore_speed,
        delay,
    }
}

fn assert_near(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-5,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_idle_clock_runs_at_normal_speed() {
    let mut hit_stop = HitStop::default();
    assert_eq!(hit_stop.scale(), 1.0);
    assert!(hit_stop.is_idle());

    hit_stop.tick(REAL_DT);
    assert_eq!(hit_stop.scale(), 1.0);
}

#[test]
fn test_immediate_restoration_climbs_linearly() {
    let mut hit_stop = HitStop::default();
    hit_stop.request(request(0.2, 2.0, 0.0));
    assert_eq!(hit_stop.scale(), 0.2);
    assert!(hit_stop.is_restoring());

    let mut expected = 0.2;
    for _ in 0..3 {
        hit_stop.tick(REAL_DT);
        expected += 2.0 * REAL_DT;
        assert_near(hit_stop.scale(), expected);
    }

    hit_stop.tick(REAL_DT);
    assert_eq!(hit_stop.scale(), 1.0);
    assert!(hit_stop.is_idle());
}

#[test]
fn test_restoration_never_overshoots() {
    let mut hit_stop = HitStop::default();
    hit_stop.request(request(0.1, 7.0, 0.0));

    let mut previous = hit_stop.scale();
    while !hit_stop.is_idle() {
        hit_stop.tick(REAL_DT);
        assert!(hit_stop.scale() > previous || hit_stop.scale() == 1.0);
        assert!(hit_stop.scale() <= 1.0);
        previous = hit_stop.scale();
    }
    assert_eq!(hit_stop.scale(), 1.0);
}

#[test]
fn test_delay_holds_scale_in_real_time() {
    let mut hit_stop = HitStop::default();
    hit_stop.request(request(0.1, 5.0, 0.25));
    assert!(hit_stop.has_pending_restore());
    assert!(!hit_stop.is_restoring());

    hit_stop.tick(REAL_DT);
    assert_eq!(hit_stop.scale(), 0.1);

    // Delay elapses and restoration starts on the same tick
    hit_stop.tick(REAL_DT);
    assert!(!hit_stop.has_pending_restore());
    assert!(hit_stop.is_restoring());
    assert_near(hit_stop.scale(), 0.1 + 5.0 * REAL_DT);
}

#[test]
fn test_new_request_cancels_pending_restore() {
    let mut hit_stop = HitStop::default();
    hit_stop.request(request(0.1, 5.0, 0.25));
    hit_stop.tick(REAL_DT);

    // Superseded before its delay ran out
    hit_stop.request(request(0.5, 1.0, 1.0));
    assert_eq!(hit_stop.scale(), 0.5);

    hit_stop.tick(REAL_DT);
    hit_stop.tick(REAL_DT);
    assert_eq!(hit_stop.scale(), 0.5);
    assert!(hit_stop.has_pending_restore());
}

#[test]
fn test_immediate_request_replaces_delayed_one() {
    let mut hit_stop = HitStop::default();
    hit_stop.request(request(0.1, 5.0, 1.0));
    hit_stop.request(request(0.2, 2.0, 0.0));

    assert!(!hit_stop.has_pending_restore());
    hit_stop.tick(REAL_DT);
    assert_near(hit_stop.scale(), 0.45);
}

#[test]
fn test_default_tuning_only_stops_on_damage() {
    let tuning = HitStopTuning::default();
    assert_eq!(tuning.on_hit, None);
    assert_eq!(tuning.on_damaged, Some(request(0.1, 5.0, 0.5)));
}
