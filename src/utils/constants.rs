//! Shared constants for readme_scrape
//!
//! This module contains the page-shape selectors, topic keywords and default
//! values used throughout the codebase to ensure consistency and avoid magic
//! strings.

/// File name written by the README sink.
pub const README_FILE_NAME: &str = "README.md";

/// Media type of the exported document.
pub const MARKDOWN_MEDIA_TYPE: &str = "text/markdown";

/// Default timeout for fetching a page over HTTP: 30 seconds
///
/// Course pages are server-rendered and small; anything slower than this is a
/// dead connection rather than a slow page.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// User agent sent by the HTTP page source.
pub const USER_AGENT: &str = concat!("readme-scrape/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Page shape
// ============================================================================

/// Section headings live under the page's panel bodies.
pub const SECTION_HEADING_SELECTOR: &str = ".panel-body h2, .panel-body.text-justify h2";

/// Any element whose `data-role` starts with `task` is a task container.
pub const TASK_SELECTOR: &str = r#"[data-role^="task"]"#;

/// Title holders inside a task container, first match wins.
pub const TASK_TITLE_SELECTOR: &str = ".panel-title, .list-group-item-heading";

/// Body holders inside a task container, first match wins.
pub const TASK_BODY_SELECTOR: &str = ".list-group-item-text, .panel-body";

/// Attribute carrying the task ordinal.
pub const TASK_POSITION_ATTR: &str = "data-position";

/// Class given to the container produced by the code-element wrapper.
pub const CODE_WRAPPER_CLASS: &str = "code-wrapper";

/// Text of the synthesized heading that precedes all tasks.
pub const TASKS_HEADING: &str = "Tasks";

/// Tags whose literal text must survive conversion as a code block.
pub const CODE_BEARING_TAGS: [&str; 2] = ["pre", "textarea"];

/// UI chrome, status badges and administrative controls stripped from a cloned
/// task before conversion.
pub const UNWANTED_SELECTORS: [&str; 15] = [
    ".hidden",
    r#"[style*="display: none"]"#,
    ".task-card-done",
    ".check-your-task-button",
    ".correction-request-buttons",
    ".score",
    ".mandatory",
    ".advanced",
    ".QA-review",
    ".review-your-work",
    ".get-a-sandbox",
    ".help",
    r#"[id^="user_id"]"#,
    ".panel-heading-actions",
    ".fine",
];
