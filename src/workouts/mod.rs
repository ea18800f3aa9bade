//! Workout package decoding and dispatch.

pub mod dispatcher;
pub mod types;

pub use dispatcher::read_package;
pub use types::{Package, PackageError, WorkoutType};
