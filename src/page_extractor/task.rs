//! Task container extraction.

use crate::page::PageTree;
use crate::utils::TASK_POSITION_ATTR;

use super::code_element::copy_node;
use super::fragment::FragmentNode;
use super::selectors::{TASK_BODY, TASK_TITLE};
use super::unwanted::remove_unwanted;

/// Numbered header of a task, e.g. `3. Build a server`.
#[must_use]
pub fn task_header(position: &str, title: &str) -> String {
    format!("{position}. {title}")
}

/// Copy one task container into header, body and spacer nodes.
///
/// The container is cloned and the clone stripped of page chrome before
/// anything is read from it. `ordinal` is the 1-based index of the task among
/// all task containers and numbers the header when the container carries no
/// position attribute.
pub fn extract_task<T: PageTree>(page: &T, container: T::Node, ordinal: usize) -> Vec<FragmentNode> {
    let (mut task, root) = page.clone_subtree(container);
    let removed = remove_unwanted(&mut task, root);

    let position = match task.attr(root, TASK_POSITION_ATTR) {
        Some(position) => position.trim().to_string(),
        None => {
            tracing::warn!(ordinal, "Task container has no position, numbering by order");
            ordinal.to_string()
        }
    };
    let title = task
        .query_first(root, &TASK_TITLE)
        .map(|node| task.text_content(node).trim().to_string())
        .unwrap_or_default();

    let mut nodes = vec![FragmentNode::heading("h3", task_header(&position, &title))];

    match task.query_first(root, &TASK_BODY) {
        Some(body) => {
            let mut content = FragmentNode::element("div");
            for child in task.child_nodes(body) {
                content.push(copy_node(&task, child));
            }
            nodes.push(content);
        }
        None => tracing::debug!(%position, "Task has no body"),
    }

    nodes.push(FragmentNode::element("br"));

    tracing::debug!(%position, %title, removed, "Extracted task");
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::ScrapedPage;
    use scraper::Selector;

    fn container(page: &ScrapedPage) -> ego_tree::NodeId {
        let selector = Selector::parse("[data-role^=\"task\"]").expect("test selector is valid");
        page.query_first(page.root(), &selector)
            .expect("fixture has a task")
    }

    fn render(nodes: &[FragmentNode]) -> String {
        nodes.iter().map(FragmentNode::to_html).collect()
    }

    #[test]
    fn test_header_format() {
        assert_eq!(task_header("3", "Build a server"), "3. Build a server");
    }

    #[test]
    fn test_full_task() {
        let page = ScrapedPage::parse_fragment(
            r#"<div data-role="task2" data-position="3">
                <h3 class="panel-title"> Build a server </h3>
                <span class="mandatory">mandatory</span>
                <div class="panel-body">Intro<p>Listen on port 8080.</p><pre>node server.js</pre></div>
            </div>"#,
        );
        let nodes = extract_task(&page, container(&page), 1);

        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0], FragmentNode::heading("h3", "3. Build a server"));
        assert_eq!(
            nodes[1].to_html(),
            "<div>Intro<p>Listen on port 8080.</p><div class=\"code-wrapper\"><pre>node server.js</pre></div></div>"
        );
        assert_eq!(nodes[2].tag(), Some("br"));
        assert!(!render(&nodes).contains("mandatory"));
    }

    #[test]
    fn test_list_group_task() {
        let page = ScrapedPage::parse_fragment(
            r#"<div data-role="task0" data-position="0">
                <h4 class="list-group-item-heading">Hello</h4>
                <div class="list-group-item-text"><p>Print it.</p></div>
            </div>"#,
        );
        let nodes = extract_task(&page, container(&page), 1);
        assert_eq!(
            render(&nodes),
            "<h3>0. Hello</h3><div><p>Print it.</p></div><br>"
        );
    }

    #[test]
    fn test_task_without_body() {
        let page = ScrapedPage::parse_fragment(
            r#"<div data-role="task1" data-position="2"><h3 class="panel-title">Bare</h3></div>"#,
        );
        let nodes = extract_task(&page, container(&page), 1);
        assert_eq!(render(&nodes), "<h3>2. Bare</h3><br>");
    }

    #[test]
    fn test_missing_position_uses_ordinal() {
        let page = ScrapedPage::parse_fragment(
            r#"<div data-role="task"><h3 class="panel-title">Numbered</h3></div>"#,
        );
        let nodes = extract_task(&page, container(&page), 4);
        assert_eq!(nodes[0], FragmentNode::heading("h3", "4. Numbered"));
    }

    #[test]
    fn test_missing_title_is_empty() {
        let page = ScrapedPage::parse_fragment(r#"<div data-role="task" data-position="5"></div>"#);
        let nodes = extract_task(&page, container(&page), 1);
        assert_eq!(nodes[0], FragmentNode::heading("h3", "5. "));
    }

    #[test]
    fn test_chrome_inside_body_is_removed() {
        let page = ScrapedPage::parse_fragment(
            r#"<div data-role="task" data-position="1">
                <div class="panel-body"><p>Do it.</p><div class="help">Get help</div></div>
            </div>"#,
        );
        let nodes = extract_task(&page, container(&page), 1);
        assert_eq!(nodes[1].to_html(), "<div><p>Do it.</p></div>");
        assert!(page.outer_html(page.root()).contains("Get help"));
    }
}
