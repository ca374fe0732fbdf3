// ABOUTME: Error types for the guide sanitizer.
// ABOUTME: Provides SanitizeError with InvalidOptions and Config variants.

use std::fmt;
use thiserror::Error;

/// Errors raised while preparing a transformer.
///
/// Transforming HTML itself never fails; malformed markup is repaired by the
/// parser. Only option validation and configuration loading can go wrong.
#[derive(Debug, Error)]
pub enum SanitizeError {
    /// Options were rejected (bad token list, out-of-range level, ...).
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// A configuration document could not be deserialized.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl SanitizeError {
    /// Creates an InvalidOptions error from any displayable cause.
    pub fn invalid_options(err: impl fmt::Display) -> Self {
        SanitizeError::InvalidOptions(err.to_string())
    }

    /// Creates a Config error from a deserialization failure.
    pub fn config(err: impl fmt::Display) -> Self {
        SanitizeError::Config(err.to_string())
    }

    /// Returns true if this is an InvalidOptions error.
    pub fn is_invalid_options(&self) -> bool {
        matches!(self, SanitizeError::InvalidOptions(_))
    }

    /// Returns true if this is a Config error.
    pub fn is_config(&self) -> bool {
        matches!(self, SanitizeError::Config(_))
    }
}
