//! Owned output fragments
//!
//! Extraction never mutates the page: everything it keeps is copied into a
//! [`FragmentNode`] tree, which is serialized to markup once the whole
//! document has been assembled.

use std::fmt::Write;

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// One node of an assembled fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentNode {
    /// A synthesized element.
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
        children: Vec<FragmentNode>,
    },
    /// Text content, escaped on serialization.
    Text(String),
    /// Markup of a subtree copied verbatim from the page.
    Markup(String),
}

impl FragmentNode {
    #[must_use]
    pub fn element(tag: impl Into<String>) -> Self {
        Self::Element {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// A heading element holding plain text.
    #[must_use]
    pub fn heading(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self::element(tag).with_child(Self::text(text))
    }

    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Self::Element { attrs, .. } = &mut self {
            attrs.push((name.into(), value.into()));
        }
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: FragmentNode) -> Self {
        self.push(child);
        self
    }

    /// Append a child. Has no effect on text and markup nodes.
    pub fn push(&mut self, child: FragmentNode) {
        if let Self::Element { children, .. } = self {
            children.push(child);
        }
    }

    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Element { tag, .. } => Some(tag.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn children(&self) -> &[FragmentNode] {
        match self {
            Self::Element { children, .. } => children,
            _ => &[],
        }
    }

    /// Concatenated text of this node and its synthesized descendants.
    ///
    /// Copied page markup is not parsed back, so it contributes nothing.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
            Self::Markup(_) => {}
        }
    }

    /// Serialize this node to HTML.
    pub fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(&html_escape::encode_text(text)),
            Self::Markup(markup) => out.push_str(markup),
            Self::Element {
                tag,
                attrs,
                children,
            } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attrs {
                    // Writing to a String cannot fail
                    let _ = write!(
                        out,
                        " {name}=\"{}\"",
                        html_escape::encode_double_quoted_attribute(value)
                    );
                }
                out.push('>');

                if VOID_ELEMENTS.contains(&tag.as_str()) {
                    return;
                }

                for child in children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }

    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }
}

/// The assembled extraction output: the children of one container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    nodes: Vec<FragmentNode>,
}

impl Fragment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: FragmentNode) {
        self.nodes.push(node);
    }

    #[must_use]
    pub fn nodes(&self) -> &[FragmentNode] {
        &self.nodes
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Inner markup of the container, i.e. every node serialized in order.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            node.write_html(&mut out);
        }
        out
    }
}
