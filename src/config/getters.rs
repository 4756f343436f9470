//! Getter methods for `ScrapeConfig`

use std::path::Path;
use std::time::Duration;

use super::types::ScrapeConfig;

impl ScrapeConfig {
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    #[must_use]
    pub fn readme_file_name(&self) -> &str {
        &self.readme_file_name
    }

    #[must_use]
    pub fn request_timeout_secs(&self) -> Option<u64> {
        self.request_timeout_secs
    }

    /// Request timeout as a `Duration`, if one is set
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    #[must_use]
    pub fn cookie(&self) -> Option<&str> {
        self.cookie.as_deref()
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    #[must_use]
    pub fn clipboard_command(&self) -> Option<&str> {
        self.clipboard_command.as_deref()
    }

    #[must_use]
    pub fn legacy_cleanup(&self) -> bool {
        self.legacy_cleanup
    }

    /// Full path the README sink writes to
    #[must_use]
    pub fn readme_path(&self) -> std::path::PathBuf {
        self.output_dir.join(&self.readme_file_name)
    }
}
