//! Error types for the yadisk-downloader application.

use thiserror::Error;

/// Main error type for the application.
///
/// Only failures that abort a whole run live here. Failures scoped to a
/// single folder item are reported through [`ItemError`] instead.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // API errors
    #[error("Folder listing failed: HTTP {status}")]
    Listing { status: u16 },

    #[error("API error: {0}")]
    Api(String),

    // File system errors
    #[error("Invalid filename (path traversal attempt): {0}")]
    InvalidFilename(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Recoverable failure of a single item.
///
/// Recorded on the item and surfaced in the run summary; never aborts the
/// rest of the batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error("download link request returned HTTP {0}")]
    ResolveStatus(u16),

    #[error("download link request failed: {0}")]
    Resolve(String),

    #[error("skipped, no download link was resolved")]
    UpstreamUrlFailure,

    #[error("download returned HTTP {0}")]
    TransferStatus(u16),

    #[error("download failed: {0}")]
    Transfer(String),

    #[error("invalid destination filename: {0}")]
    InvalidFilename(String),

    #[error("destination already used by an earlier item: {0}")]
    DuplicateDestination(String),

    #[error("write failed: {0}")]
    Io(String),
}

impl ItemError {
    /// HTTP status that caused the failure, if any.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            ItemError::ResolveStatus(status) | ItemError::TransferStatus(status) => Some(*status),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ItemError {
    fn from(err: std::io::Error) -> Self {
        ItemError::Io(err.to_string())
    }
}

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const API_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const DOWNLOAD_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}
