//! Extracted markup to README markdown
//!
//! The pipeline has three stages:
//! 1. Convert the fragment markup with htmd, using ATX headings, fenced code
//!    blocks and the code-block handler
//! 2. Optionally strip leftovers of older, hand-saved course layouts
//! 3. Run the ordered normalizer chain and trim the result
//!
//! # Usage
//!
//! ```rust
//! # use readme_scrape::content_saver::markdown_converter::{convert_html_to_markdown_sync, ConversionOptions};
//! let html = "<h2>Tasks</h2><div><p>File: main.c</p></div>";
//! let markdown = convert_html_to_markdown_sync(html, &ConversionOptions::default())?;
//! assert!(markdown.contains("**File:** `main.c`"));
//! # Ok::<(), readme_scrape::errors::ConvertError>(())
//! ```

use crate::errors::ConvertError;

pub mod custom_handlers;
pub mod html_to_markdown;
pub mod markdown_postprocessing;

pub use html_to_markdown::MarkdownConverter;
pub use markdown_postprocessing::{legacy_cleanup, normalize_markdown};

/// Configuration options for markup to markdown conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionOptions {
    /// Run the normalizer chain after conversion (default: true)
    pub normalize: bool,

    /// Strip project badges, tips lines, doubled inline code in fences and
    /// dead `/rltoken` link targets (default: false)
    pub legacy_cleanup: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            normalize: true,
            legacy_cleanup: false,
        }
    }
}

impl ConversionOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain htmd output, trimmed, with no cleanup at all
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            normalize: false,
            legacy_cleanup: false,
        }
    }

    fn converter(self) -> MarkdownConverter {
        MarkdownConverter::new()
            .with_normalize(self.normalize)
            .with_legacy_cleanup(self.legacy_cleanup)
    }
}

/// Convert extracted markup to markdown synchronously (blocking)
pub fn convert_html_to_markdown_sync(
    html: &str,
    options: &ConversionOptions,
) -> Result<String, ConvertError> {
    let markdown = options.converter().convert_sync(html)?;
    tracing::debug!(
        html_bytes = html.len(),
        markdown_bytes = markdown.len(),
        "Converted markup to markdown"
    );
    Ok(markdown)
}

/// Convert extracted markup to markdown on the blocking pool
pub async fn convert_html_to_markdown(
    html: &str,
    options: &ConversionOptions,
) -> Result<String, ConvertError> {
    options.converter().convert(html).await
}
