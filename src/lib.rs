//! Fitness Tracker - Workout Metrics Calculator
//!
//! Derives distance, mean speed and spent calories from raw sensor packages
//! for running, sports walking and pool swimming, and renders a one-line
//! summary per training.

pub mod app;
pub mod metrics;
pub mod storage;
pub mod workouts;

// Re-export commonly used types
pub use app::{default_packages, run_packages, RunError};
pub use metrics::calculator::{Training, Workout};
pub use metrics::message::InfoMessage;
pub use storage::config::AppConfig;
pub use workouts::dispatcher::read_package;
pub use workouts::types::{Package, PackageError, WorkoutType};
