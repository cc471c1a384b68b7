//! # App Error Type
//!
//! Unified error type for the counter application.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Startup                        Session                                 │
//! │  ───────                        ───────                                 │
//! │  ConfigError ──┐                CoreError (blank order) ──┐             │
//! │                ├──► AppError ◄──┤                         │             │
//! │                │                └── io::Error (stdin/stdout)            │
//! │                ▼                                                        │
//! │           main() exits with the message                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use coffee_core::CoreError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that stop the counter.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration or catalog could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The order engine rejected a call.
    #[error("Order engine error: {0}")]
    Core(#[from] CoreError),

    /// Reading the terminal or writing to it failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
