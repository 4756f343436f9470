//! Error types for readme_scrape
//!
//! Lower layers return their own enums. The session folds all of them into
//! [`ScrapeError`], whose `Display` text is what the user sees as a status
//! line.

use std::path::PathBuf;

/// Failures while acquiring page HTML.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Page file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Standard input could not be read
    #[error("Failed to read standard input: {0}")]
    Stdin(#[source] std::io::Error),

    /// Source string is neither a URL nor an existing file
    #[error("Invalid page URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Cookie contains characters not allowed in a header
    #[error("Invalid cookie header: {0}")]
    InvalidCookie(String),

    /// HTTP transport failure, including timeouts
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Server returned {status} for {url}")]
    Status { url: String, status: u16 },

    /// The blocking extraction task died
    #[error("Extraction task failed: {0}")]
    Task(String),
}

/// Failures while turning markup into markdown.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Markdown conversion failed: {0}")]
    Htmd(#[from] std::io::Error),

    #[error("Markdown conversion task panicked: {0}")]
    TaskPanicked(String),
}

/// Failures in the output sinks.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// README file could not be written
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No clipboard program was found on this system
    #[error("No clipboard command available (tried {tried})")]
    ClipboardUnavailable { tried: String },

    /// The clipboard program could not be run or exited with an error
    #[error("Clipboard command '{command}' failed: {message}")]
    ClipboardCommand { command: String, message: String },
}

/// Invalid or unreadable configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Operation-level failures, one per user action.
///
/// The display text is the status message shown for the failed action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScrapeError {
    #[error("Error scanning page: {0}")]
    Scan(String),

    #[error("Error saving file: {0}")]
    Save(String),

    #[error("Error copying to clipboard: {0}")]
    Copy(String),
}

pub type ScrapeResult<T> = Result<T, ScrapeError>;
