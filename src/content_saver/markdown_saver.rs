use std::path::{Path, PathBuf};

use crate::errors::SinkError;
use crate::utils::MARKDOWN_MEDIA_TYPE;

/// Write the README document into `output_dir`.
///
/// The directory is created when missing and an existing file is replaced.
///
/// # Returns
///
/// * `Result<PathBuf, SinkError>` - Path of the written file
pub async fn save_readme(
    markdown: &str,
    output_dir: &Path,
    file_name: &str,
) -> Result<PathBuf, SinkError> {
    let path = output_dir.join(file_name);
    let write_error = |source: std::io::Error| SinkError::Write {
        path: path.clone(),
        source,
    };

    tokio::fs::create_dir_all(output_dir)
        .await
        .map_err(write_error)?;
    tokio::fs::write(&path, markdown.as_bytes())
        .await
        .map_err(write_error)?;

    log::debug!(
        "Saved {} bytes of {} to {}",
        markdown.len(),
        MARKDOWN_MEDIA_TYPE,
        path.display()
    );

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_creates_directory_and_overwrites() {
        let dir = tempfile::tempdir().expect("Test operation should succeed");
        let target = dir.path().join("nested");

        save_readme("first", &target, "README.md")
            .await
            .expect("Test operation should succeed");
        let path = save_readme("## Tasks", &target, "README.md")
            .await
            .expect("Test operation should succeed");

        assert_eq!(path, target.join("README.md"));
        let written = std::fs::read_to_string(&path).expect("Test operation should succeed");
        assert_eq!(written, "## Tasks");
    }

    #[tokio::test]
    async fn test_save_reports_path_on_failure() {
        let dir = tempfile::tempdir().expect("Test operation should succeed");
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "not a directory").expect("Test operation should succeed");

        let err = save_readme("x", &blocker, "README.md")
            .await
            .expect_err("writing below a file must fail");
        assert!(matches!(err, SinkError::Write { .. }));
        assert!(err.to_string().contains("README.md"));
    }
}
