//! Error types for board construction.

use thiserror::Error;

/// Errors that can occur while building a board circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BoardError {
    /// The board configuration is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Circuit assembly failed.
    #[error("Circuit error: {0}")]
    Circuit(#[from] galton_ir::IrError),
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;
