//! Validation, loading and derived settings for `ScrapeConfig`

use std::path::Path;

use super::types::ScrapeConfig;
use crate::content_saver::ConversionOptions;
use crate::errors::ConfigError;

impl ScrapeConfig {
    /// Check field values that serde and the builder cannot enforce
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let name = self.readme_file_name.trim();
        if name.is_empty() {
            return Err(ConfigError::Invalid {
                field: "readme_file_name",
                reason: "must not be empty".to_string(),
            });
        }
        if name.contains(['/', '\\']) {
            return Err(ConfigError::Invalid {
                field: "readme_file_name",
                reason: format!("'{name}' must be a bare file name"),
            });
        }
        if self.request_timeout_secs == Some(0) {
            return Err(ConfigError::Invalid {
                field: "request_timeout_secs",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self
            .clipboard_command
            .as_deref()
            .is_some_and(|command| command.trim().is_empty())
        {
            return Err(ConfigError::Invalid {
                field: "clipboard_command",
                reason: "must not be blank".to_string(),
            });
        }
        Ok(())
    }

    /// Load and validate a configuration from a JSON file
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// holds invalid values.
    pub async fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_json_str(&contents)
    }

    /// Parse and validate a configuration from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON or holds invalid values.
    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Markdown conversion settings derived from this configuration
    #[must_use]
    pub fn conversion_options(&self) -> ConversionOptions {
        ConversionOptions {
            legacy_cleanup: self.legacy_cleanup,
            ..ConversionOptions::default()
        }
    }
}
