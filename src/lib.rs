//! Scrape a structured course page into a clean README.md
//!
//! The pipeline runs in four stages:
//!
//! 1. A [`PageSource`] loads the page (saved file, stdin or HTTP).
//! 2. [`page_extractor`] picks the Resources, Learning Objectives and
//!    Requirements sections plus every task into one HTML fragment.
//! 3. [`content_saver::markdown_converter`] turns the fragment into markdown
//!    and normalizes it.
//! 4. A [`ScrapeSession`] keeps the result and saves or copies it on request.

pub mod config;
pub mod content_saver;
pub mod errors;
pub mod page;
pub mod page_extractor;
pub mod page_source;
pub mod session;
pub mod status;
pub mod utils;

pub use config::{ScrapeConfig, ScrapeConfigBuilder};
pub use content_saver::{
    Clipboard, ConversionOptions, MarkdownConverter, SystemClipboard, convert_html_to_markdown,
    convert_html_to_markdown_sync, save_readme,
};
pub use errors::{ConfigError, ConvertError, ScrapeError, ScrapeResult, SinkError, SourceError};
pub use page::{PageTree, ScrapedPage};
pub use page_extractor::{Extraction, ExtractionSummary, Topic, extract_page_markup};
pub use page_source::{AnySource, HtmlFileSource, HttpSource, InlineSource, PageSource, StdinSource};
pub use session::ScrapeSession;
pub use status::{Status, StatusKind};

/// Extract and convert a page held in memory, without a session.
///
/// # Errors
///
/// Returns an error if markdown conversion fails.
pub async fn scrape_html(html: &str, options: &ConversionOptions) -> Result<String, ConvertError> {
    let html = html.to_owned();
    let extraction = tokio::task::spawn_blocking(move || extract_page_markup(&html))
        .await
        .map_err(|e| ConvertError::TaskPanicked(e.to_string()))?;
    convert_html_to_markdown(&extraction.fragment.to_html(), options).await
}
