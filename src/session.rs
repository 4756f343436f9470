//! Scan, save and copy operations
//!
//! A session holds the markdown produced by the last successful scan and the
//! current status line. Every operation catches its own failure, records it as
//! an error status, and returns it; nothing is retried.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;

use crate::config::ScrapeConfig;
use crate::content_saver::{Clipboard, SystemClipboard, convert_html_to_markdown, save_readme};
use crate::errors::{ScrapeError, ScrapeResult};
use crate::page_extractor::ExtractionSummary;
use crate::page_source::PageSource;
use crate::status::{COPY_DONE, SCAN_DONE, SCANNING, Status};

/// Marks a scan as in flight until dropped.
struct ScanGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> ScanGuard<'a> {
    fn try_acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for ScanGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// One user's scraping session.
pub struct ScrapeSession<C: Clipboard = SystemClipboard> {
    config: ScrapeConfig,
    clipboard: C,
    scanning: AtomicBool,
    snapshot: RwLock<Option<Arc<str>>>,
    summary: RwLock<Option<ExtractionSummary>>,
    status: RwLock<Status>,
}

impl ScrapeSession<SystemClipboard> {
    /// Session using the system clipboard, or the configured clipboard command.
    #[must_use]
    pub fn new(config: ScrapeConfig) -> Self {
        let clipboard = SystemClipboard::from_config(config.clipboard_command());
        Self::with_clipboard(config, clipboard)
    }
}

impl<C: Clipboard> ScrapeSession<C> {
    #[must_use]
    pub fn with_clipboard(config: ScrapeConfig, clipboard: C) -> Self {
        Self {
            config,
            clipboard,
            scanning: AtomicBool::new(false),
            snapshot: RwLock::new(None),
            summary: RwLock::new(None),
            status: RwLock::new(Status::default()),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ScrapeConfig {
        &self.config
    }

    #[must_use]
    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status.read().clone()
    }

    /// Markdown from the last successful scan.
    #[must_use]
    pub fn snapshot(&self) -> Option<Arc<str>> {
        self.snapshot.read().clone()
    }

    /// What the last successful scan extracted.
    #[must_use]
    pub fn summary(&self) -> Option<ExtractionSummary> {
        self.summary.read().clone()
    }

    #[must_use]
    pub fn is_scanning(&self) -> bool {
        self.scanning.load(Ordering::Acquire)
    }

    fn set_status(&self, status: Status) {
        *self.status.write() = status;
    }

    fn fail(&self, err: ScrapeError) -> ScrapeError {
        tracing::warn!(error = %err, "Operation failed");
        self.set_status(Status::from(&err));
        err
    }

    /// Extract the page from `source`, convert it and keep the markdown.
    ///
    /// A scan started while another is in flight is refused. On failure the
    /// previous snapshot is kept.
    pub async fn scan<S: PageSource>(&self, source: &S) -> ScrapeResult<Arc<str>> {
        let Some(_guard) = ScanGuard::try_acquire(&self.scanning) else {
            return Err(self.fail(ScrapeError::Scan(
                "a scan is already in progress".to_string(),
            )));
        };
        self.set_status(Status::neutral(SCANNING));
        tracing::info!(source = %source.describe(), "Scanning page");

        let extraction = source
            .run_extraction()
            .await
            .map_err(|e| self.fail(ScrapeError::Scan(e.to_string())))?;

        let markup = extraction.fragment.to_html();
        let markdown = convert_html_to_markdown(&markup, &self.config.conversion_options())
            .await
            .map_err(|e| self.fail(ScrapeError::Scan(e.to_string())))?;

        let markdown: Arc<str> = Arc::from(markdown);
        tracing::info!(
            summary = %extraction.summary,
            bytes = markdown.len(),
            "Page converted"
        );
        *self.snapshot.write() = Some(Arc::clone(&markdown));
        *self.summary.write() = Some(extraction.summary);
        self.set_status(Status::success(SCAN_DONE));
        Ok(markdown)
    }

    fn current_snapshot(&self, to_error: fn(String) -> ScrapeError) -> ScrapeResult<Arc<str>> {
        self.snapshot()
            .ok_or_else(|| self.fail(to_error("no content scanned yet".to_string())))
    }

    /// Write the last scanned markdown as the README file.
    pub async fn save(&self) -> ScrapeResult<PathBuf> {
        let markdown = self.current_snapshot(ScrapeError::Save)?;
        let file_name = self.config.readme_file_name();

        let path = save_readme(&markdown, self.config.output_dir(), file_name)
            .await
            .map_err(|e| self.fail(ScrapeError::Save(e.to_string())))?;

        tracing::info!(path = %path.display(), "README saved");
        self.set_status(Status::saved(file_name));
        Ok(path)
    }

    /// Put the last scanned markdown on the clipboard.
    pub async fn copy(&self) -> ScrapeResult<()> {
        let markdown = self.current_snapshot(ScrapeError::Copy)?;

        self.clipboard
            .write_text(&markdown)
            .await
            .map_err(|e| self.fail(ScrapeError::Copy(e.to_string())))?;

        tracing::info!(bytes = markdown.len(), "Markdown copied to clipboard");
        self.set_status(Status::success(COPY_DONE));
        Ok(())
    }
}

impl<C: Clipboard> std::fmt::Debug for ScrapeSession<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrapeSession")
            .field("config", &self.config)
            .field("scanning", &self.is_scanning())
            .field("status", &*self.status.read())
            .finish_non_exhaustive()
    }
}
