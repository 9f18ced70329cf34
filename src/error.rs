use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for logscrub operations
#[derive(Error, Debug)]
pub enum ScrubError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Summary error: {0}")]
    Summary(#[from] SummaryError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Marker error: {0}")]
    Markers(#[from] aho_corasick::BuildError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Errors raised while reading a workspace document
#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("Malformed workspace document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Unknown config key: {key}")]
    UnknownKey { key: String },

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

/// Result type alias for logscrub operations
pub type ScrubResult<T> = Result<T, ScrubError>;

/// Helper trait for adding context to errors
pub trait ErrorContext<T> {
    fn context<C>(self, context: C) -> ScrubResult<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    fn with_context<C, F>(self, f: F) -> ScrubResult<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T> ErrorContext<T> for Result<T, io::Error> {
    fn context<C>(self, context: C) -> ScrubResult<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| ScrubError::Io(io::Error::new(e.kind(), format!("{}: {}", context, e))))
    }

    fn with_context<C, F>(self, f: F) -> ScrubResult<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| ScrubError::Io(io::Error::new(e.kind(), format!("{}: {}", f(), e))))
    }
}

impl ScrubError {
    /// A short remediation hint for the CLI, if one applies
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ScrubError::Io(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                Some("Check file permissions on the target files")
            }
            ScrubError::Summary(SummaryError::Malformed(_)) => {
                Some("Expected shape: {\"data\":{\"workspace\":{\"viewType\":..,\"userRole\":..}}}")
            }
            ScrubError::Config(ConfigError::UnknownKey { .. }) => {
                Some("Run `logscrub config list` to see the available keys")
            }
            ScrubError::Markers(_) => Some("Check the [markers] section of .logscrub/config.toml"),
            _ => None,
        }
    }
}
