//! Fluent builder for `ScrapeConfig`
//!
//! Every field has a default, so the builder has no required steps; `build`
//! validates the assembled values.

use std::path::PathBuf;

use super::types::ScrapeConfig;
use crate::errors::ConfigError;

#[derive(Debug, Clone, Default)]
pub struct ScrapeConfigBuilder {
    config: ScrapeConfig,
}

impl ScrapeConfig {
    /// Create a builder starting from the defaults
    ///
    /// # Example
    /// ```rust
    /// # use readme_scrape::config::ScrapeConfig;
    /// # fn main() -> Result<(), readme_scrape::errors::ConfigError> {
    /// let config = ScrapeConfig::builder()
    ///     .output_dir("./0x00-hello_world")
    ///     .request_timeout_secs(Some(10))
    ///     .build()?;
    /// assert!(config.readme_path().ends_with("README.md"));
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn builder() -> ScrapeConfigBuilder {
        ScrapeConfigBuilder::default()
    }

    /// Start a builder from this configuration, e.g. to apply overrides
    #[must_use]
    pub fn to_builder(&self) -> ScrapeConfigBuilder {
        ScrapeConfigBuilder {
            config: self.clone(),
        }
    }
}

impl ScrapeConfigBuilder {
    #[must_use]
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    #[must_use]
    pub fn readme_file_name(mut self, name: impl Into<String>) -> Self {
        self.config.readme_file_name = name.into();
        self
    }

    /// Set the HTTP request timeout. `None` disables it.
    #[must_use]
    pub fn request_timeout_secs(mut self, secs: Option<u64>) -> Self {
        self.config.request_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn cookie(mut self, cookie: impl Into<String>) -> Self {
        self.config.cookie = Some(cookie.into());
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub fn clipboard_command(mut self, command: impl Into<String>) -> Self {
        self.config.clipboard_command = Some(command.into());
        self
    }

    #[must_use]
    pub fn legacy_cleanup(mut self, enabled: bool) -> Self {
        self.config.legacy_cleanup = enabled;
        self
    }

    /// Validate and return the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` for an empty README name, a README name
    /// containing a path separator, a zero timeout, or a blank clipboard
    /// command.
    pub fn build(self) -> Result<ScrapeConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
