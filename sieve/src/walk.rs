//! Depth-first traversal of a document tree.

use log::debug;

use crate::{Filter, Matches, Node, Result};

/// Visit `root` and its descendants in document order, appending every
/// node the filter accepts to `matches`.
///
/// Uses an explicit stack, so nesting depth is bounded only by memory.
/// Returns the number of nodes visited.
pub fn walk<N: Node>(root: &N, filter: &Filter, matches: &mut Matches) -> Result<usize> {
    let before = matches.len();
    visit(root, filter, matches)?;
    let mut visited = 1;

    // Children are pushed right to left so the leftmost pops first
    let mut stack: Vec<N> = root.children().into_iter().rev().collect();
    while let Some(node) = stack.pop() {
        visited += 1;
        visit(&node, filter, matches)?;
        stack.extend(node.children().into_iter().rev());
    }

    debug!(
        "visited {} node(s), {} matched",
        visited,
        matches.len() - before
    );
    Ok(visited)
}

fn visit<N: Node>(node: &N, filter: &Filter, matches: &mut Matches) -> Result<()> {
    if filter.matches(node) {
        matches.push(node)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NodeKind, Predicate, TreeNode};

    fn sample_tree() -> TreeNode {
        TreeNode::document().with_child(
            TreeNode::element("html")
                .with_child(TreeNode::element("head"))
                .with_child(
                    TreeNode::element("body")
                        .with_child(
                            TreeNode::element("a")
                                .with_attr("href", "http://example.com")
                                .with_child(TreeNode::text_node("link")),
                        )
                        .with_child(TreeNode::comment("done")),
                ),
        )
    }

    #[test]
    fn test_match_all_is_document_order() {
        let tree = sample_tree();
        let filter = Filter::new(Predicate::default()).unwrap();
        let mut matches = Matches::new();

        let visited = walk(&&tree, &filter, &mut matches).unwrap();
        assert_eq!(visited, 7);

        let order: Vec<_> = matches.iter().map(|m| m.data.as_str()).collect();
        assert_eq!(order, ["", "html", "head", "body", "a", "link", "done"]);
    }

    #[test]
    fn test_element_with_href() {
        let tree = sample_tree();
        let filter = Filter::from_json(r#"{"type":"element","attr":{"href":null}}"#).unwrap();
        let matches = filter.filter(&&tree).unwrap();

        assert_eq!(matches.len(), 1);
        let a = &matches.as_slice()[0];
        assert_eq!(a.kind, NodeKind::Element);
        assert_eq!(a.data, "a");
        assert_eq!(a.attr.get("href").map(String::as_str), Some("http://example.com"));
    }

    #[test]
    fn test_walk_appends_to_existing_matches() {
        let tree = sample_tree();
        let filter = Filter::from_args(["type=comment"]).unwrap();
        let mut matches = Matches::new();

        walk(&&tree, &filter, &mut matches).unwrap();
        walk(&&tree, &filter, &mut matches).unwrap();
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn test_deeply_nested_document() {
        let depth = 20_000;
        let html = format!("{}leaf", "<div>".repeat(depth));
        let dom = crate::html::parse_html(&html);

        let divs = Filter::from_args(["data=div"]).unwrap().filter(&dom.document).unwrap();
        assert_eq!(divs.len(), depth);

        let leaf = Filter::from_args(["type=text"]).unwrap().filter(&dom.document).unwrap();
        assert_eq!(leaf.len(), 1);
        assert_eq!(leaf.as_slice()[0].data, "leaf");
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let tree = sample_tree();
        let filter = Filter::from_args(["re2.data=."]).unwrap();

        let first = filter.filter(&&tree).unwrap().to_json_pretty("\t").unwrap();
        let second = filter.filter(&&tree).unwrap().to_json_pretty("\t").unwrap();
        assert_eq!(first, second);
    }
}
