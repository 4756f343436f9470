//! htmd-backed markup to markdown conversion.

use std::sync::Arc;

use super::custom_handlers::create_converter;
use super::markdown_postprocessing::{legacy_cleanup, normalize_markdown};
use crate::errors::ConvertError;

/// HTML to Markdown converter with configurable cleanup
#[derive(Debug, Clone, Copy)]
pub struct MarkdownConverter {
    normalize: bool,
    legacy_cleanup: bool,
}

impl Default for MarkdownConverter {
    fn default() -> Self {
        Self {
            normalize: true,
            legacy_cleanup: false,
        }
    }
}

impl MarkdownConverter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    #[must_use]
    pub fn with_legacy_cleanup(mut self, legacy_cleanup: bool) -> Self {
        self.legacy_cleanup = legacy_cleanup;
        self
    }

    /// Convert HTML to Markdown synchronously.
    ///
    /// Pipeline:
    /// 1. htmd conversion with the code-block handler
    /// 2. Legacy-layout cleanup (optional)
    /// 3. Normalizer chain (optional; the result is trimmed either way)
    pub fn convert_sync(&self, html: &str) -> Result<String, ConvertError> {
        let converter = create_converter();
        let raw_markdown = converter.convert(html)?;

        let markdown = if self.legacy_cleanup {
            legacy_cleanup(&raw_markdown)
        } else {
            raw_markdown
        };

        if self.normalize {
            Ok(normalize_markdown(&markdown))
        } else {
            Ok(markdown.trim().to_string())
        }
    }

    /// Convert HTML to Markdown on the blocking pool.
    pub async fn convert(&self, html: &str) -> Result<String, ConvertError> {
        let html = Arc::<str>::from(html);
        let converter = *self;

        tokio::task::spawn_blocking(move || converter.convert_sync(&html))
            .await
            .map_err(|e| ConvertError::TaskPanicked(e.to_string()))?
    }
}
