//! Tag search over a built tree

use crate::TreeNode;

/// A search hit and its depth below the search root
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TagMatch<'a> {
    pub node: &'a TreeNode,
    pub depth: usize,
}

/// Pre-order search for every node with tag `tag`. The root is depth 0 and
/// each level below it adds one, independently per branch.
pub fn find_all_nodes_with_tag<'a>(root: &'a TreeNode, tag: &str) -> Vec<TagMatch<'a>> {
    let mut matches = Vec::new();
    collect(root, tag, 0, &mut matches);
    matches
}

fn collect<'a>(node: &'a TreeNode, tag: &str, depth: usize, out: &mut Vec<TagMatch<'a>>) {
    if node.tag == tag {
        out.push(TagMatch { node, depth });
    }
    for child in &node.children {
        collect(child, tag, depth + 1, out);
    }
}
