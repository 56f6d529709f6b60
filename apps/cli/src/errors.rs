use thiserror::Error;

use crate::backend::BackendError;

/// Application-level error type.
/// The upload flow returns `Result<T, AppError>`; the REPL prints the error
/// and keeps running. Nothing here aborts the process.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
