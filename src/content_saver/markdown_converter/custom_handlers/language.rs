//! Code language hints carried in class names.

use regex::Regex;
use std::sync::LazyLock;

static LANGUAGE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"language-(\w+)").expect("LANGUAGE_CLASS: hardcoded regex is valid")
});

/// Language named by the first `language-xxx` token in a class attribute.
#[must_use]
pub fn language_from_class(class: &str) -> Option<String> {
    LANGUAGE_CLASS
        .captures(class)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
