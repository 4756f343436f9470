use std::path::PathBuf;

use super::PageSource;
use crate::errors::SourceError;

/// A course page saved to disk.
#[derive(Debug, Clone)]
pub struct HtmlFileSource {
    path: PathBuf,
}

impl HtmlFileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PageSource for HtmlFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn load_html(&self) -> Result<String, SourceError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::File {
                path: self.path.clone(),
                source,
            })
    }
}
