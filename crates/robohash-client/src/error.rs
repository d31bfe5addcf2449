//! Error types for RoboHash operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for RoboHash operations.
pub type RoboHashResult<T> = Result<T, RoboHashError>;

/// Errors produced while building, fetching or saving RoboHash avatars.
#[derive(Debug, Error)]
pub enum RoboHashError {
    /// The avatar key was empty or contained only whitespace.
    #[error("Avatar key must not be blank")]
    BlankAvatarKey,

    /// The avatar key contains characters that are not URL-safe and
    /// safe URL mode is disabled.
    #[error("Avatar key '{key}' contains characters that are not URL-safe")]
    UnsafeAvatarKey {
        /// The offending key
        key: String,
    },

    /// A width or height of zero was requested.
    #[error("Image {dimension} must be greater than zero")]
    InvalidDimension {
        /// Which dimension was rejected ("width" or "height")
        dimension: &'static str,
    },

    /// An operation that requires at least one image set was given none.
    #[error("At least one image set must be provided")]
    EmptyImageSets,

    /// `ImageSet::Any` has no position in a comma separated `sets` list.
    #[error("Image set 'any' cannot be used in a set list")]
    AnySetInList,

    /// Text could not be parsed into one of the option enums.
    #[error("Unknown {kind} '{value}'")]
    UnknownOption {
        /// The option type being parsed
        kind: &'static str,
        /// The text that failed to parse
        value: String,
    },

    /// RoboHash answered with a non-success HTTP status.
    #[error("RoboHash request failed with status {status}: {url}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The response body was not an image.
    #[error("Expected an image from {url} but received {content_type}")]
    UnexpectedContent {
        /// The URL that was requested
        url: String,
        /// The declared content type, or "unknown content"
        content_type: String,
    },

    /// The save destination already exists.
    #[error("Destination already exists: {}", path.display())]
    DestinationExists {
        /// The destination path
        path: PathBuf,
    },

    /// The save destination is a directory.
    #[error("Destination is a directory: {}", path.display())]
    DestinationIsDirectory {
        /// The destination path
        path: PathBuf,
    },

    /// The save destination has a file name the filesystem will not accept.
    #[error("Invalid file name for destination: {}", path.display())]
    InvalidFilename {
        /// The destination path
        path: PathBuf,
    },

    /// Filesystem failure while writing an avatar.
    #[error("Failed to {operation} {}: {source}", path.display())]
    Io {
        /// What was being attempted
        operation: &'static str,
        /// The path involved
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl RoboHashError {
    /// Build an [`RoboHashError::Io`] for the given operation and path.
    pub(crate) fn io(
        operation: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    /// Whether retrying the same request could succeed.
    pub const fn is_transient(&self) -> bool {
        match self {
            Self::RequestFailed { status, .. } => *status >= 500 || *status == 429,
            Self::Network(_) => true,
            _ => false,
        }
    }
}
