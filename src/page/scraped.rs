//! `scraper`-backed implementation of [`PageTree`].

use ego_tree::{NodeId, NodeMut, NodeRef};
use scraper::{ElementRef, Html, Node, Selector};

use super::PageTree;

/// A parsed HTML document.
///
/// Node handles are `ego_tree` ids; removed subtrees stay in the arena but
/// are detached from the root and therefore invisible to queries.
pub struct ScrapedPage {
    html: Html,
}

impl ScrapedPage {
    /// Parse a complete HTML document.
    #[must_use]
    pub fn parse_document(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Parse an HTML fragment in a `<body>` context.
    #[must_use]
    pub fn parse_fragment(html: &str) -> Self {
        Self {
            html: Html::parse_fragment(html),
        }
    }

    fn element(&self, id: NodeId) -> Option<ElementRef<'_>> {
        self.html.tree.get(id).and_then(ElementRef::wrap)
    }
}

impl std::fmt::Debug for ScrapedPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrapedPage")
            .field("nodes", &self.html.tree.nodes().count())
            .finish()
    }
}

impl PageTree for ScrapedPage {
    type Node = NodeId;

    fn root(&self) -> NodeId {
        self.html.root_element().id()
    }

    fn query_all(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
        let Some(element) = self.element(scope) else {
            return Vec::new();
        };
        element
            .select(selector)
            .map(|found| found.id())
            .filter(|id| *id != scope)
            .collect()
    }

    fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(|element| element.value().name())
    }

    fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node).and_then(|element| element.value().attr(name))
    }

    fn attributes(&self, node: NodeId) -> Vec<(String, String)> {
        self.element(node)
            .map(|element| {
                element
                    .value()
                    .attrs()
                    .map(|(name, value)| (name.to_string(), value.to_string()))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn text_content(&self, node: NodeId) -> String {
        let Some(node_ref) = self.html.tree.get(node) else {
            return String::new();
        };
        match node_ref.value() {
            Node::Text(text) => text.to_string(),
            Node::Element(_) => ElementRef::wrap(node_ref)
                .map(|element| element.text().collect())
                .unwrap_or_default(),
            _ => String::new(),
        }
    }

    fn next_element_sibling(&self, node: NodeId) -> Option<NodeId> {
        self.html
            .tree
            .get(node)?
            .next_siblings()
            .find(|sibling| sibling.value().is_element())
            .map(|sibling| sibling.id())
    }

    fn child_nodes(&self, node: NodeId) -> Vec<NodeId> {
        let Some(node_ref) = self.html.tree.get(node) else {
            return Vec::new();
        };
        node_ref
            .children()
            .filter(|child| child.value().is_element() || child.value().is_text())
            .map(|child| child.id())
            .collect()
    }

    fn outer_html(&self, node: NodeId) -> String {
        let Some(node_ref) = self.html.tree.get(node) else {
            return String::new();
        };
        match node_ref.value() {
            Node::Text(text) => html_escape::encode_text(&**text).into_owned(),
            Node::Element(_) => ElementRef::wrap(node_ref)
                .map(|element| element.html())
                .unwrap_or_default(),
            _ => String::new(),
        }
    }

    fn clone_subtree(&self, node: NodeId) -> (Self, NodeId) {
        // Copied node by node; reparsing the serialized markup would drop
        // elements such as `<tr>` that are only valid inside a table
        let Some(source) = self.html.tree.get(node) else {
            let empty = Self::parse_fragment("");
            let root = empty.root();
            return (empty, root);
        };
        let mut html = Html::new_fragment();
        let mut root = html.tree.root_mut();
        let top = root.append(source.value().clone());
        let copied = top.id();
        copy_children(source, top);
        (Self { html }, copied)
    }

    fn remove_subtree(&mut self, node: NodeId) {
        if let Some(mut node_mut) = self.html.tree.get_mut(node) {
            node_mut.detach();
        }
    }
}

fn copy_children(source: NodeRef<'_, Node>, mut target: NodeMut<'_, Node>) {
    for child in source.children() {
        let copied = target.append(child.value().clone());
        copy_children(child, copied);
    }
}
