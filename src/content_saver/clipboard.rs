//! Clipboard sink
//!
//! Text is piped to the platform clipboard program. A configured command
//! replaces auto-detection entirely.

use std::future::Future;
use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::errors::SinkError;

/// Destination for the copy action.
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), SinkError>> + Send;
}

/// The operating system clipboard, reached through its command-line tools.
#[derive(Debug, Clone, Default)]
pub struct SystemClipboard {
    command: Option<String>,
}

enum PipeFailure {
    NotFound,
    Failed(String),
}

impl SystemClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `command` (split on whitespace) instead of auto-detection.
    #[must_use]
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: Some(command.into()),
        }
    }

    #[must_use]
    pub fn from_config(command: Option<&str>) -> Self {
        match command {
            Some(command) => Self::with_command(command),
            None => Self::new(),
        }
    }

    fn candidates(&self) -> Vec<Vec<String>> {
        if let Some(command) = &self.command {
            return vec![command.split_whitespace().map(str::to_string).collect()];
        }

        let detected: &[&[&str]] = if cfg!(target_os = "macos") {
            &[&["pbcopy"]]
        } else if cfg!(target_os = "windows") {
            &[&["clip"]]
        } else {
            &[
                &["wl-copy"],
                &["xclip", "-selection", "clipboard"],
                &["xsel", "--clipboard", "--input"],
            ]
        };
        detected
            .iter()
            .map(|argv| argv.iter().map(|arg| (*arg).to_string()).collect())
            .collect()
    }
}

async fn pipe_to(program: &str, args: &[String], text: &str) -> Result<(), PipeFailure> {
    // stderr is not captured: xclip leaves a background process holding it open
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => PipeFailure::NotFound,
            _ => PipeFailure::Failed(e.to_string()),
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .await
            .map_err(|e| PipeFailure::Failed(e.to_string()))?;
    }

    let status = child
        .wait()
        .await
        .map_err(|e| PipeFailure::Failed(e.to_string()))?;
    if status.success() {
        Ok(())
    } else {
        Err(PipeFailure::Failed(format!("exited with {status}")))
    }
}

impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), SinkError> {
        let candidates = self.candidates();
        let mut tried = Vec::new();

        for argv in &candidates {
            let Some((program, args)) = argv.split_first() else {
                continue;
            };
            let command = argv.join(" ");

            match pipe_to(program, args, text).await {
                Ok(()) => {
                    log::debug!("Copied {} bytes with {}", text.len(), command);
                    return Ok(());
                }
                Err(PipeFailure::NotFound) if self.command.is_none() => {
                    log::debug!("Clipboard command {program} not found, trying next");
                    tried.push(program.clone());
                }
                Err(PipeFailure::NotFound) => {
                    return Err(SinkError::ClipboardCommand {
                        command,
                        message: "command not found".to_string(),
                    });
                }
                Err(PipeFailure::Failed(message)) => {
                    return Err(SinkError::ClipboardCommand { command, message });
                }
            }
        }

        Err(SinkError::ClipboardUnavailable {
            tried: if tried.is_empty() {
                "nothing".to_string()
            } else {
                tried.join(", ")
            },
        })
    }
}
