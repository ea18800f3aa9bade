//! Workout package types.
//!
//! A package is the raw sensor payload for one training: a short workout
//! type code plus positional numeric values.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Workout type code carried by a sensor package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutType {
    /// Pool swimming (`SWM`)
    #[serde(rename = "SWM")]
    Swimming,
    /// Running (`RUN`)
    #[serde(rename = "RUN")]
    Running,
    /// Sports walking (`WLK`)
    #[serde(rename = "WLK")]
    Walking,
}

impl WorkoutType {
    /// All supported workout types.
    pub const ALL: [WorkoutType; 3] = [
        WorkoutType::Swimming,
        WorkoutType::Running,
        WorkoutType::Walking,
    ];

    /// Package code for this workout type.
    pub fn code(&self) -> &'static str {
        match self {
            WorkoutType::Swimming => "SWM",
            WorkoutType::Running => "RUN",
            WorkoutType::Walking => "WLK",
        }
    }

    /// Ordered names of the positional package values.
    pub fn parameters(&self) -> &'static [&'static str] {
        match self {
            WorkoutType::Swimming => &["action", "duration", "weight", "length_pool", "count_pool"],
            WorkoutType::Running => &["action", "duration", "weight"],
            WorkoutType::Walking => &["action", "duration", "weight", "height"],
        }
    }

    /// Number of positional values a package of this type must carry.
    pub fn arity(&self) -> usize {
        self.parameters().len()
    }
}

impl std::fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for WorkoutType {
    type Err = PackageError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        WorkoutType::ALL
            .into_iter()
            .find(|workout_type| workout_type.code() == code)
            .ok_or_else(|| PackageError::UnknownWorkoutType(code.to_string()))
    }
}

/// Raw sensor package: workout code plus positional values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// Workout type code (`SWM`, `RUN`, `WLK`)
    pub code: String,
    /// Positional values in the order declared by the workout type
    pub values: Vec<f64>,
}

impl Package {
    /// Create a new package.
    pub fn new(code: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            values,
        }
    }
}

/// Errors raised while decoding a sensor package.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PackageError {
    /// Code does not name a supported workout type
    #[error("Unknown workout type: {0}")]
    UnknownWorkoutType(String),

    /// Wrong number of positional values for the workout type
    #[error("{workout_type} package expects {expected} values, got {actual}")]
    ArityMismatch {
        workout_type: WorkoutType,
        expected: usize,
        actual: usize,
    },

    /// Count parameter is not a non-negative whole number
    #[error("Parameter '{parameter}' must be a non-negative whole number, got {value}")]
    InvalidCount {
        parameter: &'static str,
        value: f64,
    },
}
