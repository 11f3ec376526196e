use crate::domain::tts::{ProviderError, UsageError};
use std::path::PathBuf;

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error("Output file already exists: {}", .0.display())]
    OutputExists(PathBuf),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Interrupted")]
    Interrupted,
}

impl AppError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) => 2,
            Self::OutputExists(_) | Self::Provider(_) | Self::Io(_) | Self::Config(_) => 1,
            // 128 + SIGINT, as shells report it
            Self::Interrupted => 130,
        }
    }

    /// Usage errors are followed by the help text
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Config(format!("{:#}", err))
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
