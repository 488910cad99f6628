//! Alert Logging
//!
//! Data model for incoming alert batches and the fixed human-readable
//! rendering written to standard output.

mod model;
mod render;

pub use model::{AlertBatch, AlertEntry};
pub use render::{log_batch, render_batch, TIMESTAMP_FORMAT};

use thiserror::Error;

/// Alert logging errors
#[derive(Debug, Error)]
pub enum LogError {
    #[error("Failed to write alert output: {0}")]
    Write(#[from] std::io::Error),
}
