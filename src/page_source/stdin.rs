use tokio::io::AsyncReadExt;

use super::PageSource;
use crate::errors::SourceError;

/// Page HTML piped into the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinSource;

impl StdinSource {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PageSource for StdinSource {
    fn describe(&self) -> String {
        "standard input".to_string()
    }

    async fn load_html(&self) -> Result<String, SourceError> {
        let mut html = String::new();
        tokio::io::stdin()
            .read_to_string(&mut html)
            .await
            .map_err(SourceError::Stdin)?;
        Ok(html)
    }
}
