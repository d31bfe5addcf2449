//! CLI-specific error types and exit codes.

use robohash_client::RoboHashError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The request options were rejected.
    #[error("Invalid request: {0}")]
    Request(#[source] RoboHashError),

    /// RoboHash could not be reached or answered badly.
    #[error("Download failed: {0}")]
    Download(#[source] RoboHashError),

    /// The avatar could not be written.
    #[error("Could not save avatar: {0}")]
    Output(#[source] RoboHashError),

    /// Client configuration error (bad base URL, TLS setup...).
    #[error("Configuration error: {0}")]
    Config(#[source] RoboHashError),

    /// Rendering output failed.
    #[error("Output formatting error: {0}")]
    Format(#[from] serde_json::Error),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where one fits:
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 69: Service unavailable
    /// - 73: Can't create output file
    /// - 78: Configuration error
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Request(_) => 2,
            Self::Download(_) => 69, // EX_UNAVAILABLE
            Self::Output(_) => 73,   // EX_CANTCREAT
            Self::Config(_) => 78,   // EX_CONFIG
            Self::Format(_) => 1,
        }
    }
}

impl From<RoboHashError> for CliError {
    fn from(err: RoboHashError) -> Self {
        match err {
            RoboHashError::BlankAvatarKey
            | RoboHashError::UnsafeAvatarKey { .. }
            | RoboHashError::InvalidDimension { .. }
            | RoboHashError::EmptyImageSets
            | RoboHashError::AnySetInList
            | RoboHashError::UnknownOption { .. } => Self::Request(err),
            RoboHashError::RequestFailed { .. }
            | RoboHashError::UnexpectedContent { .. }
            | RoboHashError::Network(_) => Self::Download(err),
            RoboHashError::DestinationExists { .. }
            | RoboHashError::DestinationIsDirectory { .. }
            | RoboHashError::InvalidFilename { .. }
            | RoboHashError::Io { .. } => Self::Output(err),
            RoboHashError::InvalidUrl(_) => Self::Config(err),
        }
    }
}
