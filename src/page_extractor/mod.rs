//! Course page content extraction.
//!
//! This module turns a course page into a single markup fragment holding the
//! resources, learning objectives and requirements sections (each at most
//! once, in the order their headings appear) followed by a synthesized
//! "Tasks" heading and one block per task container.
//!
//! Extraction is pure: it runs against any [`PageTree`], never mutates the
//! page, and has no failure path. A page that does not look like a course page
//! yields just the "Tasks" heading.

pub mod code_element;
pub mod fragment;
pub mod section;
mod selectors;
pub mod task;
pub mod unwanted;

pub use code_element::{is_code_bearing, wrap_code_element};
pub use fragment::{Fragment, FragmentNode};
pub use section::extract_section;
pub use task::{extract_task, task_header};
pub use unwanted::remove_unwanted;

use std::fmt;

use crate::page::{PageTree, ScrapedPage};
use crate::utils::TASKS_HEADING;

use selectors::{SECTION_HEADINGS, TASKS};

/// The named sections pulled from a course page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Resources,
    LearningObjectives,
    Requirements,
}

impl Topic {
    /// All topics in matching priority order.
    pub const ALL: [Topic; 3] = [
        Topic::Resources,
        Topic::LearningObjectives,
        Topic::Requirements,
    ];

    fn keywords(self) -> &'static [&'static str] {
        match self {
            // "learning objective" also covers the plural
            Topic::Resources => &["resources"],
            Topic::LearningObjectives => &["learning objective"],
            Topic::Requirements => &["requirements"],
        }
    }

    /// Whether a heading's text names this topic.
    ///
    /// Matching is a case-insensitive substring test on the trimmed text.
    #[must_use]
    pub fn matches(self, heading_text: &str) -> bool {
        let text = heading_text.trim().to_lowercase();
        self.keywords().iter().any(|keyword| text.contains(keyword))
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Topic::Resources => "resources",
            Topic::LearningObjectives => "learning objectives",
            Topic::Requirements => "requirements",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which topics already produced a section during one extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionsFound {
    resources: bool,
    learning_objectives: bool,
    requirements: bool,
}

impl SectionsFound {
    #[must_use]
    pub fn is_found(&self, topic: Topic) -> bool {
        match topic {
            Topic::Resources => self.resources,
            Topic::LearningObjectives => self.learning_objectives,
            Topic::Requirements => self.requirements,
        }
    }

    fn mark(&mut self, topic: Topic) {
        match topic {
            Topic::Resources => self.resources = true,
            Topic::LearningObjectives => self.learning_objectives = true,
            Topic::Requirements => self.requirements = true,
        }
    }

    /// Claim a heading for the first topic, in priority order, that it names
    /// and that has not produced a section yet.
    pub fn claim(&mut self, heading_text: &str) -> Option<Topic> {
        let topic = Topic::ALL
            .into_iter()
            .find(|topic| !self.is_found(*topic) && topic.matches(heading_text))?;
        self.mark(topic);
        Some(topic)
    }
}

/// What one extraction produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionSummary {
    /// Topics extracted, in output order.
    pub sections: Vec<Topic>,
    /// Number of task blocks.
    pub tasks: usize,
}

impl fmt::Display for ExtractionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sections.is_empty() {
            write!(f, "no sections")?;
        } else {
            let names: Vec<&str> = self.sections.iter().map(|topic| topic.label()).collect();
            write!(f, "{}", names.join(", "))?;
        }
        write!(f, "; {} task{}", self.tasks, if self.tasks == 1 { "" } else { "s" })
    }
}

/// Assembled fragment plus its summary.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub fragment: Fragment,
    pub summary: ExtractionSummary,
}

/// Run the full extraction against a page.
pub fn extract<T: PageTree>(page: &T) -> Extraction {
    let root = page.root();
    let mut fragment = Fragment::new();
    let mut summary = ExtractionSummary::default();
    let mut found = SectionsFound::default();

    for heading in page.query_all(root, &SECTION_HEADINGS) {
        let text = page.text_content(heading);
        let Some(topic) = found.claim(&text) else {
            continue;
        };
        tracing::debug!(%topic, heading = text.trim(), "Matched section heading");
        for node in extract_section(page, heading) {
            fragment.push(node);
        }
        summary.sections.push(topic);
    }

    fragment.push(FragmentNode::heading("h2", TASKS_HEADING));

    for (index, container) in page.query_all(root, &TASKS).into_iter().enumerate() {
        for node in extract_task(page, container, index + 1) {
            fragment.push(node);
        }
        summary.tasks += 1;
    }

    tracing::debug!(%summary, "Extraction complete");
    Extraction { fragment, summary }
}

/// Serialized markup of everything extracted from `page`.
pub fn extract_content<T: PageTree>(page: &T) -> String {
    extract(page).fragment.to_html()
}

/// Parse a whole HTML document and extract it.
///
/// The parsed page is dropped before returning, so callers can hold the
/// result across `.await` points.
#[must_use]
pub fn extract_page_markup(html: &str) -> Extraction {
    let page = ScrapedPage::parse_document(html);
    extract(&page)
}
