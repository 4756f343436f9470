//! Queryable page tree abstraction
//!
//! The extractors never touch a concrete DOM. They run against [`PageTree`],
//! which exposes just the capabilities the extraction algorithms need:
//! selector queries, sibling and child traversal, attribute and text reads,
//! subtree cloning/removal, and serialization back to markup.
//!
//! [`ScrapedPage`] implements the trait over a `scraper` document, which is
//! what every page source produces and what the tests build fixtures with.

mod scraped;

pub use scraped::ScrapedPage;

use scraper::Selector;

/// A traversable, queryable document tree.
///
/// Node handles are cheap `Copy` identifiers that are only meaningful for the
/// tree that produced them.
pub trait PageTree: Sized {
    type Node: Copy + Eq + std::fmt::Debug;

    /// Top-level element that all document-wide queries start from.
    fn root(&self) -> Self::Node;

    /// Descendant elements of `scope` matching `selector`, in document order.
    ///
    /// `scope` itself is never part of the result.
    fn query_all(&self, scope: Self::Node, selector: &Selector) -> Vec<Self::Node>;

    /// First descendant of `scope` matching `selector`, in document order.
    fn query_first(&self, scope: Self::Node, selector: &Selector) -> Option<Self::Node> {
        self.query_all(scope, selector).into_iter().next()
    }

    /// Lower-case tag name, `None` for text nodes.
    fn tag_name(&self, node: Self::Node) -> Option<&str>;

    fn attr(&self, node: Self::Node, name: &str) -> Option<&str>;

    /// All attributes of an element in source order; empty for text nodes.
    fn attributes(&self, node: Self::Node) -> Vec<(String, String)>;

    /// Rendered text of the node and all its descendants.
    fn text_content(&self, node: Self::Node) -> String;

    /// Current value of an editable element, if one is set.
    ///
    /// Serialized pages carry the live value of form controls in the `value`
    /// attribute. An empty value counts as unset.
    fn editable_value(&self, node: Self::Node) -> Option<&str> {
        self.attr(node, "value").filter(|value| !value.is_empty())
    }

    /// The editable value when present, otherwise the rendered text.
    fn effective_text(&self, node: Self::Node) -> String {
        match self.editable_value(node) {
            Some(value) => value.to_string(),
            None => self.text_content(node),
        }
    }

    fn next_element_sibling(&self, node: Self::Node) -> Option<Self::Node>;

    /// Element and text children, in order.
    fn child_nodes(&self, node: Self::Node) -> Vec<Self::Node>;

    /// Serialized markup of the node including its own tag.
    fn outer_html(&self, node: Self::Node) -> String;

    /// Deep copy of a subtree as an independent tree, plus the handle of the
    /// copied node inside it.
    fn clone_subtree(&self, node: Self::Node) -> (Self, Self::Node);

    /// Detach a subtree. Detached nodes are unreachable from every query.
    fn remove_subtree(&mut self, node: Self::Node);
}
