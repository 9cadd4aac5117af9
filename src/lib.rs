//! ctk-coordinates: display-independent value models for CTK-style numeric editors
//!
//! This crate provides the numeric state behind coordinate editors, double
//! spin boxes and double sliders: bounded values, step-based adjustment with
//! optional inverted controls, unit normalization and precision handling.
//! Nothing here renders anything; a UI layer observes changes through the
//! listener registry on [`CoordinateVector`].

use thiserror::Error;

pub mod bounded;
pub mod constants;
pub mod coordinates;
pub mod modules;
pub mod numeric;

// Re-export commonly used types
pub use bounded::{BoundedValue, DecimalsOption};
pub use coordinates::config::CoordinatesConfig;
pub use coordinates::{CoordinateVector, SubscriptionId};
pub use modules::ModuleReference;

/// Main error type for the ctk-coordinates library
#[derive(Debug, Error)]
pub enum CoordinatesError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Dimension mismatch: expected {expected} values, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Index {index} out of range for dimension {dimension}")]
    IndexOutOfRange { index: usize, dimension: usize },

    #[error("Parse error on token {token:?}: {reason}")]
    ParseError { token: String, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for ctk-coordinates operations
pub type Result<T> = std::result::Result<T, CoordinatesError>;
