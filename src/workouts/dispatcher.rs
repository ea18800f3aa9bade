//! Sensor package dispatcher.
//!
//! Maps a workout type code to the matching training constructor and
//! spreads the positional package values into it.

use crate::metrics::calculator::{Running, SportsWalking, Swimming, Workout};
use crate::workouts::types::{PackageError, WorkoutType};

/// Read a sensor package and construct the matching training.
pub fn read_package(code: &str, values: &[f64]) -> Result<Workout, PackageError> {
    let workout_type: WorkoutType = code.parse()?;
    let workout = build(workout_type, values)?;

    tracing::debug!(
        "Read {} package with {} values as {}",
        workout_type,
        values.len(),
        workout.label()
    );

    Ok(workout)
}

/// Construct a training of the given type from positional values.
pub fn build(workout_type: WorkoutType, values: &[f64]) -> Result<Workout, PackageError> {
    let workout: Workout = match (workout_type, values) {
        (WorkoutType::Swimming, &[action, duration, weight, length_pool, count_pool]) => {
            Swimming::new(
                to_count("action", action)?,
                duration,
                weight,
                length_pool,
                to_count("count_pool", count_pool)?,
            )
            .into()
        }
        (WorkoutType::Running, &[action, duration, weight]) => {
            Running::new(to_count("action", action)?, duration, weight).into()
        }
        (WorkoutType::Walking, &[action, duration, weight, height]) => {
            SportsWalking::new(to_count("action", action)?, duration, weight, height).into()
        }
        _ => {
            return Err(PackageError::ArityMismatch {
                workout_type,
                expected: workout_type.arity(),
                actual: values.len(),
            })
        }
    };

    Ok(workout)
}

/// Convert a raw value into a step/stroke/lap count.
fn to_count(parameter: &'static str, value: f64) -> Result<u32, PackageError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Ok(value as u32)
    } else {
        Err(PackageError::InvalidCount { parameter, value })
    }
}
