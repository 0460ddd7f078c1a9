//! Tree views
//!
//! Filtered projections of a scan tree. A node stays visible when it
//! matches the view or has a visible descendant, so every match keeps
//! its ancestor chain.

use std::fmt;
use std::str::FromStr;

use pac_a11y::AriaRole;
use pac_tree::TreeNode;

/// Which part of the tree to show
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum View {
    /// Everything
    #[default]
    Schema,
    Landmarks,
    Headers,
}

impl View {
    pub const ALL: [View; 3] = [View::Schema, View::Landmarks, View::Headers];

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Schema => "schema",
            View::Landmarks => "landmarks",
            View::Headers => "headers",
        }
    }

    /// Does a single node match this view. Landmarks and headings are
    /// recognised by the implicit ARIA role of the node's tag.
    pub fn matches(&self, node: &TreeNode) -> bool {
        let role = AriaRole::implicit_for_tag(&node.tag);
        match self {
            View::Schema => true,
            View::Landmarks => role.is_some_and(|r| r.is_landmark()),
            View::Headers => role == Some(AriaRole::Heading),
        }
    }

    /// Prune `forest` down to matching nodes and their ancestors
    pub fn apply(&self, forest: Vec<TreeNode>) -> Vec<TreeNode> {
        if *self == View::Schema {
            return forest;
        }
        forest.into_iter().filter_map(|root| self.prune(root)).collect()
    }

    fn prune(&self, mut node: TreeNode) -> Option<TreeNode> {
        let children = std::mem::take(&mut node.children);
        node.children = children
            .into_iter()
            .filter_map(|child| self.prune(child))
            .collect();
        (self.matches(&node) || !node.children.is_empty()).then_some(node)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown view name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown view: {0} (expected schema, landmarks or headers)")]
pub struct ViewParseError(pub String);

impl FromStr for View {
    type Err = ViewParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ViewParseError(s.to_string()))
    }
}
