//! Summary driver.
//!
//! Reads each sensor package in order and writes its training summary,
//! one line per package. The first failing package halts the run.

use crate::workouts::dispatcher::read_package;
use crate::workouts::types::{Package, PackageError};
use std::io::Write;
use thiserror::Error;

/// Errors that stop a summary run.
#[derive(Debug, Error)]
pub enum RunError {
    /// Package at the given position could not be read
    #[error("Package #{index} ({code}) rejected: {source}")]
    Package {
        index: usize,
        code: String,
        #[source]
        source: PackageError,
    },

    /// Summary output could not be written
    #[error("Failed to write summary: {0}")]
    Output(#[from] std::io::Error),
}

/// Built-in sample packages.
pub fn default_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Write one summary line per package, in order.
///
/// Returns the number of lines written. Lines written before a failing
/// package stay written.
pub fn run_packages<W: Write>(packages: &[Package], out: &mut W) -> Result<usize, RunError> {
    for (index, package) in packages.iter().enumerate() {
        let workout = read_package(&package.code, &package.values).map_err(|source| {
            tracing::warn!(
                "Halting after {} of {} packages: {}",
                index,
                packages.len(),
                source
            );
            RunError::Package {
                index,
                code: package.code.clone(),
                source,
            }
        })?;

        let info = workout.show_training_info();
        writeln!(out, "{}", info.get_message())?;
    }

    out.flush()?;
    Ok(packages.len())
}
