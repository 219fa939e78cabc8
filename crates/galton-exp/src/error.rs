//! Experiment error types.

use thiserror::Error;

/// Result type for experiment operations.
pub type ExpResult<T> = Result<T, ExpError>;

/// Errors that can occur while running an experiment.
#[derive(Debug, Error)]
pub enum ExpError {
    /// Board construction failed.
    #[error("Board error: {0}")]
    Board(String),

    /// Circuit execution failed on every configured backend.
    #[error("Execution error: {0}")]
    Execution(String),

    /// Writing results to disk failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// Serializing a record failed.
    #[error("Export error: {0}")]
    Export(String),
}

impl From<galton_board::BoardError> for ExpError {
    fn from(e: galton_board::BoardError) -> Self {
        ExpError::Board(e.to_string())
    }
}

impl From<galton_hal::HalError> for ExpError {
    fn from(e: galton_hal::HalError) -> Self {
        ExpError::Execution(e.to_string())
    }
}

impl From<serde_json::Error> for ExpError {
    fn from(e: serde_json::Error) -> Self {
        ExpError::Export(e.to_string())
    }
}

impl From<std::io::Error> for ExpError {
    fn from(e: std::io::Error) -> Self {
        ExpError::Io(e.to_string())
    }
}
