//! Metrics module for training calculations and summaries.

pub mod calculator;
pub mod message;

pub use calculator::{Running, SportsWalking, Swimming, Training, Workout};
pub use message::InfoMessage;
