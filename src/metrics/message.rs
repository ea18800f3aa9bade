//! Completed-training summary message.
//!
//! Every numeric field renders with exactly three fractional digits.

use serde::{Deserialize, Serialize};

/// Information message about a completed training.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    /// Training type label (e.g. "Running")
    pub training_type: String,
    /// Duration in hours
    pub duration: f64,
    /// Distance in kilometers
    pub distance: f64,
    /// Mean speed in km/h
    pub speed: f64,
    /// Spent calories in kcal
    pub calories: f64,
}

impl InfoMessage {
    /// Create a new summary message.
    pub fn new(
        training_type: impl Into<String>,
        duration: f64,
        distance: f64,
        speed: f64,
        calories: f64,
    ) -> Self {
        Self {
            training_type: training_type.into(),
            duration,
            distance,
            speed,
            calories,
        }
    }

    /// Render the summary as a single line of text.
    pub fn get_message(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Training type: {}; Duration: {:.3} hours; Distance: {:.3} km; \
             Mean speed: {:.3} km/h; Spent calories: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}
