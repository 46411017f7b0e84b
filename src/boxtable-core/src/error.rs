//! Error types for table rendering.

use thiserror::Error;

/// Errors that can occur while configuring, rendering or printing a table.
#[derive(Debug, Error)]
pub enum TableError {
    /// The table cannot be laid out in its current state.
    #[error("invalid table state: {0}")]
    InvalidState(String),

    /// Configuration could not be loaded or parsed
    #[error("configuration error: {0}")]
    Config(String),

    /// Writing the rendered table failed.
    #[error("failed to write table: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TableError>;
