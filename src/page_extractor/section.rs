//! Heading-delimited section extraction.

use crate::page::PageTree;

use super::code_element::copy_node;
use super::fragment::FragmentNode;

/// Copy a heading and everything that belongs to it.
///
/// The result starts with a fresh heading of the same level holding the
/// trimmed heading text, followed by copies of the heading's element siblings
/// up to the next heading of the same level (or the end of the parent).
/// Code-bearing siblings are wrapped so their literal text is kept.
pub fn extract_section<T: PageTree>(page: &T, heading: T::Node) -> Vec<FragmentNode> {
    let tag = page.tag_name(heading).unwrap_or("h2").to_string();
    let title = page.text_content(heading).trim().to_string();

    let mut nodes = vec![FragmentNode::heading(tag.as_str(), title)];

    let mut cursor = page.next_element_sibling(heading);
    while let Some(sibling) = cursor {
        if page.tag_name(sibling) == Some(tag.as_str()) {
            break;
        }
        nodes.push(copy_node(page, sibling));
        cursor = page.next_element_sibling(sibling);
    }

    tracing::debug!(heading = %tag, siblings = nodes.len() - 1, "Extracted section");
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::ScrapedPage;
    use scraper::Selector;

    fn heading(page: &ScrapedPage, css: &str) -> ego_tree::NodeId {
        let selector = Selector::parse(css).expect("test selector is valid");
        page.query_first(page.root(), &selector)
            .expect("fixture has the heading")
    }

    fn render(nodes: &[FragmentNode]) -> String {
        nodes.iter().map(FragmentNode::to_html).collect()
    }

    #[test]
    fn test_stops_at_next_same_level_heading() {
        let page = ScrapedPage::parse_fragment(
            "<div><h2 id=\"r\">  Resources \n</h2><p>one</p><h3>sub</h3><ul><li>two</li></ul><h2>Next</h2><p>three</p></div>",
        );
        let nodes = extract_section(&page, heading(&page, "#r"));

        assert_eq!(
            render(&nodes),
            "<h2>Resources</h2><p>one</p><h3>sub</h3><ul><li>two</li></ul>"
        );
    }

    #[test]
    fn test_runs_to_end_of_parent() {
        let page = ScrapedPage::parse_fragment(
            "<div><h2>Requirements</h2><p>a</p></div><p>outside</p>",
        );
        let nodes = extract_section(&page, heading(&page, "h2"));
        assert_eq!(render(&nodes), "<h2>Requirements</h2><p>a</p>");
    }

    #[test]
    fn test_heading_without_siblings() {
        let page = ScrapedPage::parse_fragment("<div><h2>Resources</h2></div>");
        let nodes = extract_section(&page, heading(&page, "h2"));
        assert_eq!(nodes, vec![FragmentNode::heading("h2", "Resources")]);
    }

    #[test]
    fn test_code_siblings_are_wrapped() {
        let page = ScrapedPage::parse_fragment(
            "<div><h2>Requirements</h2><pre>gcc -Wall</pre></div>",
        );
        let nodes = extract_section(&page, heading(&page, "h2"));
        assert_eq!(
            render(&nodes),
            "<h2>Requirements</h2><div class=\"code-wrapper\"><pre>gcc -Wall</pre></div>"
        );
    }

    #[test]
    fn test_page_is_not_mutated() {
        let page = ScrapedPage::parse_fragment("<div id=\"s\"><h2>Resources</h2><p>x</p></div>");
        let before = page.outer_html(page.root());
        let _ = extract_section(&page, heading(&page, "h2"));
        assert_eq!(page.outer_html(page.root()), before);
    }
}
