use std::time::Duration;

use regions::{Easing, Spring, SpringConfig, Tween};

// =============================================================================
// Easing Function Tests
// =============================================================================

#[test]
fn test_easing_boundaries() {
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ] {
        assert_eq!(easing.apply(0.0), 0.0, "{:?} at 0", easing);
        assert_eq!(easing.apply(1.0), 1.0, "{:?} at 1", easing);
    }
}

#[test]
fn test_easing_monotonic() {
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ] {
        let mut prev = 0.0;
        for i in 1..=10 {
            let t = i as f32 / 10.0;
            let val = easing.apply(t);
            assert!(val >= prev, "{:?} not monotonic at t={}", easing, t);
            prev = val;
        }
    }
}

#[test]
fn test_ease_in_out_midpoint() {
    assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
    assert!(Easing::EaseInOut.apply(0.25) < 0.25);
    assert!(Easing::EaseInOut.apply(0.75) > 0.75);
}

// =============================================================================
// Tween Tests
// =============================================================================

#[test]
fn test_tween_starts_finished() {
    let tween = Tween::new(4.0, Duration::from_millis(300), Easing::Linear);
    assert!(tween.is_finished());
    assert_eq!(tween.value(), 4.0);
}

#[test]
fn test_tween_linear_progress() {
    let mut tween = Tween::new(0.0, Duration::from_millis(100), Easing::Linear);
    tween.retarget(10.0);
    assert_eq!(tween.value(), 0.0);

    tween.advance(Duration::from_millis(25));
    assert!((tween.value() - 2.5).abs() < 0.01);

    tween.advance(Duration::from_millis(500));
    assert!(tween.is_finished());
    assert_eq!(tween.value(), 10.0);
}

#[test]
fn test_tween_retarget_from_current_value() {
    let mut tween = Tween::new(0.0, Duration::from_millis(100), Easing::Linear);
    tween.retarget(10.0);
    tween.advance(Duration::from_millis(50));

    tween.retarget(0.0);
    assert!((tween.value() - 5.0).abs() < 0.01);
    assert!(!tween.is_finished());
}

#[test]
fn test_tween_retarget_same_target_keeps_progress() {
    let mut tween = Tween::new(0.0, Duration::from_millis(100), Easing::Linear);
    tween.retarget(10.0);
    tween.advance(Duration::from_millis(50));
    tween.retarget(10.0);
    assert!((tween.progress() - 0.5).abs() < 0.01);
}

#[test]
fn test_zero_duration_tween_jumps() {
    let mut tween = Tween::new(0.0, Duration::ZERO, Easing::EaseOut);
    tween.retarget(3.0);
    assert_eq!(tween.value(), 3.0);
    assert!(tween.is_finished());
}

// =============================================================================
// Spring Tests
// =============================================================================

#[test]
fn test_spring_presets() {
    assert!(SpringConfig::motion().is_underdamped());
    assert!(SpringConfig::stiff().is_underdamped());
    let critical = SpringConfig::new(100.0, 20.0, 1.0);
    assert!(!critical.is_underdamped());
    assert_eq!(SpringConfig::default(), SpringConfig::motion());
}

#[test]
fn test_spring_at_rest_is_settled() {
    let mut spring = Spring::new(SpringConfig::default(), 0.5);
    assert!(spring.is_settled());
    spring.advance(Duration::from_secs(1));
    assert_eq!(spring.value(), 0.5);
}

#[test]
fn test_spring_reaches_target_exactly() {
    let mut spring = Spring::new(SpringConfig::default(), 0.0);
    spring.set_target(1.0);
    assert!(!spring.is_settled());

    for _ in 0..300 {
        spring.advance(Duration::from_millis(16));
    }
    assert!(spring.is_settled());
    assert_eq!(spring.value(), 1.0);
    assert_eq!(spring.velocity(), 0.0);
}

#[test]
fn test_underdamped_spring_overshoots() {
    let mut spring = Spring::new(SpringConfig::motion(), 0.0);
    spring.set_target(1.0);

    let mut peak: f32 = 0.0;
    for _ in 0..120 {
        spring.advance(Duration::from_millis(10));
        peak = peak.max(spring.value());
    }
    assert!(peak > 1.0, "peak {peak}");
}

#[test]
fn test_long_frame_is_stable() {
    let mut spring = Spring::new(SpringConfig::stiff(), 0.0);
    spring.set_target(1.0);
    spring.advance(Duration::from_secs(5));
    assert_eq!(spring.value(), 1.0);
}

#[test]
fn test_finish_jumps_to_target() {
    let mut spring = Spring::new(SpringConfig::default(), 0.0);
    spring.set_target(0.9);
    spring.finish();
    assert_eq!(spring.value(), 0.9);
    assert!(spring.is_settled());
}
