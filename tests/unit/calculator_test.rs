//! Unit tests for training metric calculations.

use fitness_tracker::metrics::calculator::{Running, SportsWalking, Swimming, Training, Workout};
use proptest::prelude::*;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_running_reference_session() {
    let run = Running::new(15000, 1.0, 75.0);

    assert_close(run.get_distance(), 9.75);
    assert_close(run.get_mean_speed(), 9.75);
    assert_close(run.get_spent_calories(), 699.75);
}

#[test]
fn test_running_longer_session() {
    // 13 km over 1.5 h
    let run = Running::new(20000, 1.5, 80.0);
    let speed = 13.0 / 1.5;

    assert_close(run.get_distance(), 13.0);
    assert_close(run.get_mean_speed(), speed);
    assert_close(
        run.get_spent_calories(),
        (18.0 * speed - 20.0) * 80.0 / 1000.0 * 1.5 * 60.0,
    );
}

#[test]
fn test_walking_reference_session() {
    let walk = SportsWalking::new(9000, 1.0, 75.0, 180.0);

    assert_close(walk.get_distance(), 5.85);
    assert_close(walk.get_mean_speed(), 5.85);
    assert_close(walk.get_spent_calories(), 157.5);
}

#[test]
fn test_walking_uses_floor_division() {
    // 26^2 / 180 = 3.75, floored to 3
    let walk = SportsWalking::new(40000, 1.0, 75.0, 180.0);

    assert_close(walk.get_spent_calories(), (0.035 * 75.0 + 3.0 * 0.029 * 75.0) * 60.0);
}

#[test]
fn test_walking_zero_height_is_not_finite() {
    let walk = SportsWalking::new(9000, 1.0, 75.0, 0.0);

    assert!(!walk.get_spent_calories().is_finite());
}

#[test]
fn test_swimming_reference_session() {
    let swim = Swimming::new(720, 1.0, 80.0, 25.0, 40);

    assert_close(swim.get_distance(), 0.9936);
    assert_close(swim.get_mean_speed(), 1.0);
    assert_close(swim.get_spent_calories(), 336.0);
}

#[test]
fn test_swimming_speed_ignores_strokes() {
    let few_strokes = Swimming::new(100, 0.5, 80.0, 25.0, 40);
    let many_strokes = Swimming::new(5000, 0.5, 80.0, 25.0, 40);

    assert_close(few_strokes.get_mean_speed(), 2.0);
    assert_close(few_strokes.get_mean_speed(), many_strokes.get_mean_speed());
    assert!(many_strokes.get_distance() > few_strokes.get_distance());
}

#[test]
fn test_show_training_info_fields() {
    let info = Workout::from(Running::new(15000, 1.0, 75.0)).show_training_info();

    assert_eq!(info.training_type, "Running");
    assert_close(info.duration, 1.0);
    assert_close(info.distance, 9.75);
    assert_close(info.speed, 9.75);
    assert_close(info.calories, 699.75);
}

#[test]
fn test_workout_labels() {
    assert_eq!(Workout::from(Running::new(1, 1.0, 1.0)).label(), "Running");
    assert_eq!(
        Workout::from(SportsWalking::new(1, 1.0, 1.0, 1.0)).label(),
        "SportsWalking"
    );
    assert_eq!(
        Workout::from(Swimming::new(1, 1.0, 1.0, 1.0, 1)).label(),
        "Swimming"
    );
}

proptest! {
    #[test]
    fn prop_metrics_are_deterministic(
        action in 0u32..100_000,
        duration in 0.1f64..5.0,
        weight in 30.0f64..150.0,
        height in 120.0f64..220.0,
    ) {
        let first = Workout::from(SportsWalking::new(action, duration, weight, height));
        let second = first.clone();

        prop_assert_eq!(first.get_distance().to_bits(), second.get_distance().to_bits());
        prop_assert_eq!(first.get_mean_speed().to_bits(), second.get_mean_speed().to_bits());
        prop_assert_eq!(
            first.get_spent_calories().to_bits(),
            second.get_spent_calories().to_bits()
        );
    }

    #[test]
    fn prop_step_distance_scales_with_action(action in 0u32..100_000, duration in 0.1f64..5.0) {
        let run = Running::new(action, duration, 75.0);
        let walk = SportsWalking::new(action, duration, 75.0, 180.0);

        prop_assert_eq!(run.get_distance(), walk.get_distance());
        prop_assert!((run.get_mean_speed() * duration - run.get_distance()).abs() < 1e-9);
    }
}
