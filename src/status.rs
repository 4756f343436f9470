//! User-facing status line

use std::fmt;

use crate::errors::ScrapeError;

/// Style category of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    #[default]
    Neutral,
    Success,
    Error,
}

/// The single status message shown after each operation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Status {
    pub message: String,
    pub kind: StatusKind,
}

pub const SCANNING: &str = "Scanning page...";
pub const SCAN_DONE: &str = "Content converted successfully!";
pub const COPY_DONE: &str = "Content copied to clipboard!";

impl Status {
    #[must_use]
    pub fn neutral(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Neutral,
        }
    }

    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Success,
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Error,
        }
    }

    /// Status reported after writing the README.
    #[must_use]
    pub fn saved(file_name: &str) -> Self {
        Self::success(format!("File saved as {file_name}"))
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }
}

impl From<&ScrapeError> for Status {
    fn from(err: &ScrapeError) -> Self {
        Self::error(err.to_string())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
