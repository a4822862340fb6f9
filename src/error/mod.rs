// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the cg application.
//!
//! A rejected commit message is not an error; it is the `Rejected`
//! classification. Errors here cover everything that prevents a
//! classification from being made at all.

use thiserror::Error;

/// The main error type for cg operations.
#[derive(Error, Debug)]
pub enum CgError {
    // IO errors (message file missing or unreadable)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Result type alias for cg operations.
pub type Result<T> = std::result::Result<T, CgError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CgError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
