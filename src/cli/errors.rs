use clap::error::ErrorKind;
use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Size must be greater than 0, got: {size}")]
    ZeroSize { size: u32 },

    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },
}

impl AppError {
    /// Clap error kind used when reporting this as a usage error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::ZeroSize { .. } => ErrorKind::ValueValidation,
            AppError::MissingArgument { .. } => ErrorKind::MissingRequiredArgument,
        }
    }
}
