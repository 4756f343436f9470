//! Test utilities shared by the readme_scrape integration tests

use parking_lot::Mutex;
use readme_scrape::errors::SinkError;
use readme_scrape::{Clipboard, ScrapeConfig};
use tempfile::TempDir;

/// The saved course page used across the end-to-end tests
#[allow(dead_code)]
pub const COURSE_PAGE: &str = include_str!("../fixtures/course_page.html");

/// Wrap `body` in a minimal HTML document
#[allow(dead_code)]
pub fn create_test_html(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{}</title>
</head>
<body>
    {}
</body>
</html>"#,
        html_escape::encode_text(title),
        body
    )
}

/// Wrap section markup in the panel body that section headings live under
#[allow(dead_code)]
pub fn panel(inner: &str) -> String {
    format!(r#"<div class="panel-body text-justify">{inner}</div>"#)
}

/// A task container with a position, a title and a body
#[allow(dead_code)]
pub fn task(position: usize, title: &str, body: &str) -> String {
    format!(
        r#"<div data-role="task{position}" data-position="{position}">
  <h3 class="panel-title">{title}</h3>
  <div class="panel-body">{body}</div>
</div>"#
    )
}

/// Config writing into a fresh temporary directory
#[allow(dead_code)]
pub fn temp_config() -> (TempDir, ScrapeConfig) {
    let dir = TempDir::new().expect("Test operation should succeed");
    let config = ScrapeConfig::builder()
        .output_dir(dir.path())
        .build()
        .expect("Test operation should succeed");
    (dir, config)
}

/// Clipboard that records every write
#[derive(Default)]
#[allow(dead_code)]
pub struct MemoryClipboard {
    pub writes: Mutex<Vec<String>>,
    pub fail_with: Option<String>,
}

#[allow(dead_code)]
impl MemoryClipboard {
    pub fn failing(message: &str) -> Self {
        Self {
            writes: Mutex::new(Vec::new()),
            fail_with: Some(message.to_string()),
        }
    }

    pub fn last(&self) -> Option<String> {
        self.writes.lock().last().cloned()
    }
}

impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), SinkError> {
        if let Some(message) = &self.fail_with {
            return Err(SinkError::ClipboardCommand {
                command: "memory".to_string(),
                message: message.clone(),
            });
        }
        self.writes.lock().push(text.to_string());
        Ok(())
    }
}
