//! Error types for activity disaggregation.
//!
//! This module defines the error types used throughout the aidsplit crates.

use thiserror::Error;

/// Result type for split operations.
pub type SplitResult<T> = Result<T, SplitError>;

/// Errors that can occur during activity construction or presentation.
///
/// The split algorithm itself is total: once an [`crate::Activity`] has been
/// built, disaggregation cannot fail. Errors arise only at the boundaries -
/// validating inputs at construction time and serializing outputs.
#[derive(Error, Debug, Clone)]
pub enum SplitError {
    /// Invalid activity configuration.
    #[error("Invalid activity: {reason}")]
    InvalidActivity {
        /// The reason the activity is invalid.
        reason: String,
    },

    /// Negative percentage on a weighted dimension item.
    #[error("Invalid percentage for {dimension} '{code}': {value}")]
    InvalidPercentage {
        /// The dimension the item belongs to (country, region, sector).
        dimension: String,
        /// The item's code, or "?" if the item carries none.
        code: String,
        /// The offending percentage value.
        value: String,
    },

    /// JSON serialization of the split output failed.
    #[error("Serialization failed: {reason}")]
    Serialization {
        /// The reason serialization failed.
        reason: String,
    },
}

impl SplitError {
    /// Create an invalid activity error.
    #[must_use]
    pub fn invalid_activity(reason: impl Into<String>) -> Self {
        Self::InvalidActivity {
            reason: reason.into(),
        }
    }

    /// Create an invalid percentage error.
    #[must_use]
    pub fn invalid_percentage(
        dimension: impl Into<String>,
        code: Option<&str>,
        value: impl ToString,
    ) -> Self {
        Self::InvalidPercentage {
            dimension: dimension.into(),
            code: code.unwrap_or("?").to_string(),
            value: value.to_string(),
        }
    }

    /// Create a serialization error.
    #[must_use]
    pub fn serialization(reason: impl Into<String>) -> Self {
        Self::Serialization {
            reason: reason.into(),
        }
    }
}
