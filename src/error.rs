//! Top-level error type.
//!
//! Validation failures are not errors: they live in the form's error map and
//! never leave the form module. Everything here aborts start-up or a worker.

pub use crate::config::ConfigError;
pub use crate::state::StateError;
pub use crate::transport::SubmitError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Submission error: {0}")]
    Submit(#[from] SubmitError),

    #[error("State error: {0}")]
    State(#[from] StateError),

    /// Terminal setup and teardown
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A global logger was already installed
    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type AppResult<T> = Result<T, AppError>;
