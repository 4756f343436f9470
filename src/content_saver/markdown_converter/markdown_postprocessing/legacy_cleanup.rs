//! Extra cleanup for pages saved by hand from older course layouts.
//!
//! Those pages carry a project badge image, a tips link with a broken URL,
//! inline code wrapped a second time inside fences, and tracking links to
//! `/rltoken/...` that resolve nowhere once the page is saved.

use regex::Regex;
use std::sync::LazyLock;

static PROJECT_BADGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[Project badge\][^\n]*\n?")
        .expect("PROJECT_BADGE: hardcoded regex is valid")
});

static TIPS_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[Tips\][^\n]*\n?").expect("TIPS_LINE: hardcoded regex is valid")
});

/// A fence whose only line is a single inline code span.
static DOUBLE_WRAPPED_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```\n`([^`\n]*)`\n```")
        .expect("DOUBLE_WRAPPED_CODE: hardcoded regex is valid")
});

static RLTOKEN_TARGET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(/rltoken[^)\n]*\)").expect("RLTOKEN_TARGET: hardcoded regex is valid")
});

/// Apply the legacy-layout cleanup. Runs before the regular normalizer, which
/// collapses any blank lines this leaves behind.
#[must_use]
pub fn legacy_cleanup(markdown: &str) -> String {
    let text = PROJECT_BADGE.replace_all(markdown, "");
    let text = TIPS_LINE.replace_all(&text, "");
    let text = DOUBLE_WRAPPED_CODE.replace_all(&text, "```\n$1\n```");
    let text = RLTOKEN_TARGET.replace_all(&text, "");
    text.into_owned()
}
