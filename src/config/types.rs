//! Core configuration type for scraping sessions
//!
//! `ScrapeConfig` holds everything the page sources, the converter and the
//! output sinks need. It is built through [`ScrapeConfig::builder`] or loaded
//! from a JSON file, and validated in both cases.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::utils::{DEFAULT_REQUEST_TIMEOUT_SECS, README_FILE_NAME, USER_AGENT};

/// Main configuration struct for a scraping session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    /// Directory the README is written into
    pub(crate) output_dir: PathBuf,

    /// Bare file name of the README, no path separators
    pub(crate) readme_file_name: String,

    /// HTTP request timeout; `None` waits indefinitely
    pub(crate) request_timeout_secs: Option<u64>,

    /// `Cookie` header sent with HTTP requests, for pages behind a login
    pub(crate) cookie: Option<String>,

    pub(crate) user_agent: String,

    /// Clipboard program and arguments; auto-detected when unset
    pub(crate) clipboard_command: Option<String>,

    /// Strip leftovers of older hand-saved course layouts
    pub(crate) legacy_cleanup: bool,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            readme_file_name: README_FILE_NAME.to_string(),
            request_timeout_secs: Some(DEFAULT_REQUEST_TIMEOUT_SECS),
            cookie: None,
            user_agent: USER_AGENT.to_string(),
            clipboard_command: None,
            legacy_cleanup: false,
        }
    }
}
