//! Training metric calculations.
//!
//! Each workout modality derives distance, mean speed and spent calories
//! from its raw sensor counts. The shared formulas live as default methods
//! on [`Training`]; variants override only what differs.
//!
//! Inputs are not validated: a zero `duration` (or walking `height`) yields
//! infinite or NaN metrics rather than an error.

use crate::metrics::message::InfoMessage;

/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour.
pub const MIN_IN_HOUR: f64 = 60.0;

/// Common capability of every training modality.
pub trait Training {
    /// Distance covered by one action (step or stroke), in meters.
    const LEN_STEP: f64 = 0.65;

    /// Human-readable training type label.
    fn label(&self) -> &'static str;

    /// Number of actions (steps or strokes).
    fn action(&self) -> u32;

    /// Duration in hours.
    fn duration(&self) -> f64;

    /// Get distance in kilometers.
    fn get_distance(&self) -> f64 {
        self.action() as f64 * Self::LEN_STEP / M_IN_KM
    }

    /// Get mean speed in km/h.
    fn get_mean_speed(&self) -> f64 {
        self.get_distance() / self.duration()
    }

    /// Get spent calories in kcal.
    fn get_spent_calories(&self) -> f64;

    /// Build the summary message for the completed training.
    fn show_training_info(&self) -> InfoMessage {
        InfoMessage::new(
            self.label(),
            self.duration(),
            self.get_distance(),
            self.get_mean_speed(),
            self.get_spent_calories(),
        )
    }
}

/// Running training.
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    /// Steps taken
    pub action: u32,
    /// Duration in hours
    pub duration: f64,
    /// Body weight in kilograms
    pub weight: f64,
}

impl Running {
    const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 20.0;

    pub fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }
}

impl Training for Running {
    fn label(&self) -> &'static str {
        "Running"
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn get_spent_calories(&self) -> f64 {
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.get_mean_speed()
            - Self::CALORIES_MEAN_SPEED_SHIFT)
            * self.weight
            / M_IN_KM
            * self.duration
            * MIN_IN_HOUR
    }
}

/// Sports walking training.
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    /// Steps taken
    pub action: u32,
    /// Duration in hours
    pub duration: f64,
    /// Body weight in kilograms
    pub weight: f64,
    /// Body height in centimeters
    pub height: f64,
}

impl SportsWalking {
    const CALORIES_WEIGHT_SHIFT: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub fn new(action: u32, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            action,
            duration,
            weight,
            height,
        }
    }
}

impl Training for SportsWalking {
    fn label(&self) -> &'static str {
        "SportsWalking"
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn get_spent_calories(&self) -> f64 {
        // Floor division of speed^2 by height, kept for compatibility with
        // previously published results.
        let speed_height_ratio = self.get_mean_speed().powi(2).div_euclid(self.height);

        (Self::CALORIES_WEIGHT_SHIFT * self.weight
            + speed_height_ratio * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * self.weight)
            * self.duration
            * MIN_IN_HOUR
    }
}

/// Pool swimming training.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    /// Strokes taken
    pub action: u32,
    /// Duration in hours
    pub duration: f64,
    /// Body weight in kilograms
    pub weight: f64,
    /// Pool length in meters
    pub length_pool: f64,
    /// Number of pool lengths swum
    pub count_pool: u32,
}

impl Swimming {
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(action: u32, duration: f64, weight: f64, length_pool: f64, count_pool: u32) -> Self {
        Self {
            action,
            duration,
            weight,
            length_pool,
            count_pool,
        }
    }
}

impl Training for Swimming {
    const LEN_STEP: f64 = 1.38;

    fn label(&self) -> &'static str {
        "Swimming"
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    /// Pool-lap based; stroke distance is not used.
    fn get_mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool as f64 / M_IN_KM / self.duration
    }

    fn get_spent_calories(&self) -> f64 {
        (self.get_mean_speed() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.weight
    }
}

/// A constructed training of any supported modality.
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    /// Get the training type label.
    pub fn label(&self) -> &'static str {
        match self {
            Workout::Running(t) => t.label(),
            Workout::SportsWalking(t) => t.label(),
            Workout::Swimming(t) => t.label(),
        }
    }

    /// Get distance in kilometers.
    pub fn get_distance(&self) -> f64 {
        match self {
            Workout::Running(t) => t.get_distance(),
            Workout::SportsWalking(t) => t.get_distance(),
            Workout::Swimming(t) => t.get_distance(),
        }
    }

    /// Get mean speed in km/h.
    pub fn get_mean_speed(&self) -> f64 {
        match self {
            Workout::Running(t) => t.get_mean_speed(),
            Workout::SportsWalking(t) => t.get_mean_speed(),
            Workout::Swimming(t) => t.get_mean_speed(),
        }
    }

    /// Get spent calories in kcal.
    pub fn get_spent_calories(&self) -> f64 {
        match self {
            Workout::Running(t) => t.get_spent_calories(),
            Workout::SportsWalking(t) => t.get_spent_calories(),
            Workout::Swimming(t) => t.get_spent_calories(),
        }
    }

    /// Build the summary message for the completed training.
    pub fn show_training_info(&self) -> InfoMessage {
        match self {
            Workout::Running(t) => t.show_training_info(),
            Workout::SportsWalking(t) => t.show_training_info(),
            Workout::Swimming(t) => t.show_training_info(),
        }
    }
}

impl From<Running> for Workout {
    fn from(training: Running) -> Self {
        Workout::Running(training)
    }
}

impl From<SportsWalking> for Workout {
    fn from(training: SportsWalking) -> Self {
        Workout::SportsWalking(training)
    }
}

impl From<Swimming> for Workout {
    fn from(training: Swimming) -> Self {
        Workout::Swimming(training)
    }
}
