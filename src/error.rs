use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for formula-updater operations
#[derive(Error, Debug)]
pub enum FormulaUpdaterError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in formula-updater
pub type Result<T> = std::result::Result<T, FormulaUpdaterError>;

impl FormulaUpdaterError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        FormulaUpdaterError::Config(msg.into())
    }

    /// Create a settings error with context
    pub fn settings(msg: impl Into<String>) -> Self {
        FormulaUpdaterError::Settings(msg.into())
    }

    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FormulaUpdaterError::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FormulaUpdaterError::Write {
            path: path.into(),
            source,
        }
    }
}
