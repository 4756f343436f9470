//! Code-element wrapping
//!
//! `<pre>` blocks and `<textarea>`s hold literal code. They are copied with
//! their text forced to the element's effective text and placed inside a
//! `code-wrapper` container, which the code-block conversion rule keys off.

use crate::page::PageTree;
use crate::utils::{CODE_BEARING_TAGS, CODE_WRAPPER_CLASS};

use super::fragment::FragmentNode;

/// Whether `node` is a `<pre>` or `<textarea>` element.
pub fn is_code_bearing<T: PageTree>(page: &T, node: T::Node) -> bool {
    page.tag_name(node)
        .is_some_and(|tag| CODE_BEARING_TAGS.contains(&tag))
}

/// Wrap a code-bearing element so its literal text survives conversion.
///
/// The copy keeps the element's tag and attributes; its only child is the
/// effective text (editable value if set, rendered text otherwise). An element
/// with neither yields an empty code element.
pub fn wrap_code_element<T: PageTree>(page: &T, node: T::Node) -> FragmentNode {
    let tag = page.tag_name(node).unwrap_or("pre");
    let text = page.effective_text(node);

    let mut copy = FragmentNode::Element {
        tag: tag.to_string(),
        attrs: page.attributes(node),
        children: Vec::new(),
    };
    if !text.is_empty() {
        copy.push(FragmentNode::text(text));
    }

    FragmentNode::element("div")
        .with_attr("class", CODE_WRAPPER_CLASS)
        .with_child(copy)
}

/// Route a node through the wrapper when it holds code, copy it otherwise.
pub(crate) fn copy_node<T: PageTree>(page: &T, node: T::Node) -> FragmentNode {
    if is_code_bearing(page, node) {
        wrap_code_element(page, node)
    } else {
        FragmentNode::Markup(page.outer_html(node))
    }
}
