/*!
 * Error types for the srtmerge application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors raised while parsing timed text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A timestamp substring did not match the `HH:MM:SS,mmm` pattern
    #[error("Invalid timestamp: '{0}'")]
    InvalidTimestamp(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from timed-text parsing
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    /// Error from configuration handling
    #[error("Config error: {0}")]
    Config(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
