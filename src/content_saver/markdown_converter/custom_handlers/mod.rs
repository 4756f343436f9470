//! Custom handlers for htmd HTML-to-Markdown conversion
//!
//! Course pages keep their code in `<pre>` blocks and `<textarea>`s, usually
//! inside the `code-wrapper` container added during extraction. htmd's default
//! handling reflows or escapes that text, so both tags get one handler:
//!
//! - In a code context (a textarea with a code class, or any element whose own
//!   or parent class mentions `code`) the raw text becomes a fenced block.
//! - Any other textarea becomes its trimmed text.
//! - Any other `<pre>` falls back to its converted children.

pub mod language;

use std::rc::Rc;

use htmd::{
    Element, HtmlToMarkdown,
    element_handler::{HandlerResult, Handlers},
    options::{CodeBlockStyle, HeadingStyle, Options},
};
use markup5ever_rcdom::{Node, NodeData};

use language::language_from_class;

/// Create an htmd converter with ATX headings, fenced code blocks and the
/// code-block handler.
pub fn create_converter() -> HtmlToMarkdown {
    HtmlToMarkdown::builder()
        .options(Options {
            heading_style: HeadingStyle::Atx,
            code_block_style: CodeBlockStyle::Fenced,
            ..Default::default()
        })
        .add_handler(vec!["pre", "textarea"], code_block_handler)
        .build()
}

/// Handle `<pre>` and `<textarea>` elements
fn code_block_handler(handlers: &dyn Handlers, element: Element) -> Option<HandlerResult> {
    let is_textarea = tag_name(element.node).as_deref() == Some("textarea");
    let class = get_attr(element.attrs, "class").unwrap_or_default();
    let parent_class = parent_element(element.node)
        .and_then(|parent| node_attr(&parent, "class"))
        .unwrap_or_default();
    let in_code_context = class.contains("code") || parent_class.contains("code");

    if in_code_context {
        let code = clean_code(&extract_raw_text(element.node));
        let language = language_from_class(&class)
            .or_else(|| language_from_class(&parent_class))
            .or_else(|| child_code_language(element.node))
            .unwrap_or_default();
        return Some(HandlerResult::from(format!(
            "\n\n```{language}\n{code}\n```\n\n"
        )));
    }

    if is_textarea {
        let text = extract_raw_text(element.node);
        return Some(HandlerResult::from(text.trim().to_string()));
    }

    Some(HandlerResult::from(handlers.walk_children(element.node).content))
}

/// Trim and drop invisible characters that break copy-paste of code.
fn clean_code(raw: &str) -> String {
    raw.trim().replace('\u{00A0}', " ").replace('\u{200B}', "")
}

// === Helper Functions ===

/// Extract raw text content from a node tree, preserving all whitespace
fn extract_raw_text(node: &Rc<Node>) -> String {
    let mut text = String::new();

    match &node.data {
        NodeData::Text { contents } => text.push_str(&contents.borrow()),
        NodeData::Element { .. } | NodeData::Document => {
            for child in node.children.borrow().iter() {
                text.push_str(&extract_raw_text(child));
            }
        }
        _ => {}
    }

    text
}

fn tag_name(node: &Rc<Node>) -> Option<String> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.to_string()),
        _ => None,
    }
}

fn node_attr(node: &Rc<Node>, name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => get_attr(&attrs.borrow(), name),
        _ => None,
    }
}

/// Parent element of a node, if it has one
fn parent_element(node: &Rc<Node>) -> Option<Rc<Node>> {
    // The parent link is a Cell, so take it and put it straight back
    let weak = node.parent.take();
    node.parent.set(weak.clone());

    let parent = weak?.upgrade()?;
    matches!(parent.data, NodeData::Element { .. }).then_some(parent)
}

/// Language hint on a `<code>` child, e.g. `<pre><code class="language-c">`
fn child_code_language(node: &Rc<Node>) -> Option<String> {
    node.children
        .borrow()
        .iter()
        .filter(|child| tag_name(child).as_deref() == Some("code"))
        .find_map(|child| node_attr(child, "class").and_then(|class| language_from_class(&class)))
}

/// Get attribute value from element
fn get_attr(attrs: &[html5ever::Attribute], name: &str) -> Option<String> {
    attrs
        .iter()
        .find(|a| &*a.name.local == name)
        .map(|a| a.value.to_string())
        .filter(|v| !v.trim().is_empty())
}
