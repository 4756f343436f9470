//! Page acquisition
//!
//! A [`PageSource`] produces the HTML of a course page and runs the extraction
//! over it, handing back only the assembled fragment. The parsed page never
//! leaves the blocking task it was built on.

mod file;
mod http;
mod stdin;

pub use file::HtmlFileSource;
pub use http::HttpSource;
pub use stdin::StdinSource;

use std::future::Future;

use crate::config::ScrapeConfig;
use crate::errors::SourceError;
use crate::page_extractor::{Extraction, extract_page_markup};

/// Something that can produce a course page.
pub trait PageSource: Send + Sync {
    /// Short description for logs and status lines.
    fn describe(&self) -> String;

    /// Fetch the raw page HTML.
    fn load_html(&self) -> impl Future<Output = Result<String, SourceError>> + Send;

    /// Produce the page and run the extraction inside it.
    fn run_extraction(&self) -> impl Future<Output = Result<Extraction, SourceError>> + Send {
        async move {
            let html = self.load_html().await?;
            tracing::debug!(source = %self.describe(), bytes = html.len(), "Loaded page");

            tokio::task::spawn_blocking(move || extract_page_markup(&html))
                .await
                .map_err(|e| SourceError::Task(e.to_string()))
        }
    }
}

/// HTML already held in memory.
#[derive(Debug, Clone)]
pub struct InlineSource {
    html: String,
}

impl InlineSource {
    #[must_use]
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

impl PageSource for InlineSource {
    fn describe(&self) -> String {
        "inline html".to_string()
    }

    async fn load_html(&self) -> Result<String, SourceError> {
        Ok(self.html.clone())
    }
}

/// A source chosen from a command-line argument.
#[derive(Debug)]
pub enum AnySource {
    File(HtmlFileSource),
    Stdin(StdinSource),
    Http(HttpSource),
}

impl AnySource {
    /// `-` reads standard input, `http://` and `https://` URLs are fetched,
    /// anything else is a path to a saved page.
    ///
    /// # Errors
    ///
    /// Returns an error if a URL is malformed or the HTTP client cannot be
    /// built.
    pub fn from_arg(arg: &str, config: &ScrapeConfig) -> Result<Self, SourceError> {
        if arg == "-" {
            return Ok(Self::Stdin(StdinSource::new()));
        }
        let lowered = arg.to_ascii_lowercase();
        if lowered.starts_with("http://") || lowered.starts_with("https://") {
            return Ok(Self::Http(HttpSource::new(arg, config)?));
        }
        Ok(Self::File(HtmlFileSource::new(arg)))
    }
}

impl PageSource for AnySource {
    fn describe(&self) -> String {
        match self {
            Self::File(source) => source.describe(),
            Self::Stdin(source) => source.describe(),
            Self::Http(source) => source.describe(),
        }
    }

    async fn load_html(&self) -> Result<String, SourceError> {
        match self {
            Self::File(source) => source.load_html().await,
            Self::Stdin(source) => source.load_html().await,
            Self::Http(source) => source.load_html().await,
        }
    }
}
