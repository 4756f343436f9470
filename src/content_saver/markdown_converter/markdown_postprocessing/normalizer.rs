//! Ordered regex cleanup of converted markdown.
//!
//! The steps run strictly in declaration order. Several of them key off the
//! same label text at different positions, so reordering changes the output:
//! the bare `File:`/`Repo:` label removal must see the text before the
//! `File: value` reformatting does.
//!
//! The label-formatting steps also recognise their own output
//! (`**File:** \`x\``) and rewrite it to itself. A single pass can still leave
//! work for the next one (a removed score line turning into an empty fence,
//! say), so the chain is repeated until the text stops changing. Normalizing
//! an already normalized document therefore leaves it unchanged.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// How a matched span is rewritten.
#[derive(Clone, Copy)]
pub enum Replacement {
    /// A `regex` replacement template (`$1`, `${name}`).
    Template(&'static str),
    /// Computed from the captures.
    With(fn(&Captures<'_>) -> String),
}

impl std::fmt::Debug for Replacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Template(template) => f.debug_tuple("Template").field(template).finish(),
            Self::With(_) => f.write_str("With(..)"),
        }
    }
}

/// One named step of the cleanup chain.
#[derive(Debug)]
pub struct Substitution {
    pub name: &'static str,
    regex: Regex,
    replacement: Replacement,
    first_only: bool,
}

impl Substitution {
    fn new(name: &'static str, pattern: &str, replacement: Replacement) -> Self {
        let regex = match Regex::new(pattern) {
            Ok(regex) => regex,
            Err(e) => panic!("BUG: hardcoded regex for '{name}' is invalid: {e}"),
        };
        Self {
            name,
            regex,
            replacement,
            first_only: false,
        }
    }

    fn first_only(mut self) -> Self {
        self.first_only = true;
        self
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Apply this step to `text`.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        let limit = usize::from(self.first_only);
        match self.replacement {
            Replacement::Template(template) => self.regex.replacen(text, limit, template).into_owned(),
            Replacement::With(rewrite) => self.regex.replacen(text, limit, rewrite).into_owned(),
        }
    }
}

fn labelled_code(label: &str, caps: &Captures<'_>) -> String {
    let value = caps
        .get(1)
        .or_else(|| caps.get(2))
        .map_or("", |m| m.as_str());
    format!("**{label}:** `{value}`")
}

fn format_directory(caps: &Captures<'_>) -> String {
    labelled_code("Directory", caps)
}

fn format_file(caps: &Captures<'_>) -> String {
    labelled_code("File", caps)
}

/// Drop a bold pair with nothing but spaces inside; keep real bold spans.
fn drop_empty_bold(caps: &Captures<'_>) -> String {
    if caps[1].trim().is_empty() {
        String::new()
    } else {
        caps[0].to_string()
    }
}

/// The cleanup chain, in application order.
pub static NORMALIZER_STEPS: LazyLock<Vec<Substitution>> = LazyLock::new(|| {
    use Replacement::{Template, With};

    vec![
        Substitution::new("collapse_blank_lines", r"\n{3,}", Template("\n\n")),
        // Pairs are matched left to right on one line, so the gap between two
        // bold spans is never mistaken for an empty pair
        Substitution::new("empty_bold", r"\*\*([^*\n]*)\*\*", With(drop_empty_bold)),
        Substitution::new("score", r"Score:\s*\d+\.\d+%", Template("")),
        Substitution::new("checks_completed", r"\(Checks completed.*?\)", Template("")),
        Substitution::new("bare_repo_label", r"Repo:\n\n", Template("")),
        Substitution::new("bare_file_label", r"File:\n\n", Template("")),
        // A value already in backticks is re-wrapped as is
        Substitution::new(
            "directory_label",
            r"(?m)(?:\*\*)?Directory:(?:\*\*)?\s*(?:`([^\n]+)`[ \t]*$|([^\n]+))",
            With(format_directory),
        ),
        Substitution::new(
            "file_label",
            r"(?m)(?:\*\*)?File:(?:\*\*)?\s*(?:`([^\n]+)`[ \t]*$|([^\n]+))",
            With(format_file),
        ),
        Substitution::new(
            "read_or_watch",
            r"(?:\*\*)?Read or watch:(?:\*\*)?",
            Template("**Read or watch:**"),
        )
        .first_only(),
        Substitution::new(
            "mdn_resources",
            r"(?:\*\*)?MDN resources:(?:\*\*)?",
            Template("**MDN resources:**"),
        )
        .first_only(),
        Substitution::new("empty_code_block", r"```\n\n```", Template("")),
        Substitution::new("blank_before_fence", r"\n\n```\n", Template("\n```\n")),
        Substitution::new("blank_after_fence", r"\n```\n\n", Template("\n```\n")),
        Substitution::new("collapse_leftover_blank_lines", r"\n{3,}", Template("\n\n")),
    ]
});

/// Names of the cleanup steps in application order.
#[must_use]
pub fn step_names() -> Vec<&'static str> {
    NORMALIZER_STEPS.iter().map(|step| step.name).collect()
}

/// Upper bound on repeated passes; real pages settle in two.
const MAX_PASSES: usize = 8;

fn run_steps(markdown: &str) -> String {
    let mut text = markdown.to_string();
    for step in NORMALIZER_STEPS.iter() {
        let next = step.apply(&text);
        if next != text {
            tracing::trace!(step = step.name, "Normalizer step rewrote markdown");
        }
        text = next;
    }
    text.trim().to_string()
}

/// Run the cleanup chain until the text stops changing, trimming both ends.
#[must_use]
pub fn normalize_markdown(markdown: &str) -> String {
    let mut text = run_steps(markdown);
    for _ in 1..MAX_PASSES {
        let next = run_steps(&text);
        if next == text {
            return text;
        }
        text = next;
    }
    tracing::warn!(passes = MAX_PASSES, "Normalizer did not settle");
    text
}
