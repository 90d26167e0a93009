//! Error types for the my365-archiver application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // Authentication errors
    #[error("Authentication failed: unexpected HTTP status {0}")]
    AuthenticationStatus(u16),

    #[error("Authentication failed: response does not contain a SESSID cookie")]
    AuthenticationCookie,

    // Scrape errors
    #[error("Page fetch failed for {path}: HTTP {status}")]
    PageFetch { path: String, status: u16 },

    #[error("Extraction failed: no {what} found on page {path}")]
    Extraction { what: &'static str, path: String },

    // Download errors
    #[error("Download failed for {url}: HTTP {status}")]
    DownloadStatus { url: String, status: u16 },

    #[error("Download failed for {url}: content type '{content_type}' is not an image")]
    DownloadContentType { url: String, content_type: String },

    #[error("Download failed: {0}")]
    Download(String),

    // Manifest errors
    #[error("Manifest error: {0}")]
    Manifest(String),

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

/// Process exit codes by error category.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const CONFIG_ERROR: i32 = 2;
    pub const AUTH_ERROR: i32 = 3;
    pub const SCRAPE_ERROR: i32 = 4;
    pub const DOWNLOAD_ERROR: i32 = 5;
    pub const UNEXPECTED_ERROR: i32 = 6;
}
