//! Tree records
//!
//! Field names on the wire follow the panel's JSON shape (`elementText`,
//! `elementId`, `type`).

use serde::{Deserialize, Serialize};

/// One captured element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    pub id: String,
    pub tag: String,
    /// Allow-listed `(name, value)` pairs, in allow-list order
    pub attributes: Vec<(String, String)>,
    /// Trimmed text for text-bearing tags, empty otherwise
    pub element_text: String,
    /// Findings attached by the merge step
    pub validation: Vec<Finding>,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Value of a captured attribute
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Number of nodes in this subtree, self included
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(TreeNode::len).sum::<usize>()
    }

    /// Pre-order walk over this subtree
    pub fn walk(&self, visit: &mut impl FnMut(&TreeNode)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }

    /// Mutable lookup by id anywhere in this subtree
    pub fn find_mut(&mut self, id: &str) -> Option<&mut TreeNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(id))
    }
}

/// Severity of a finding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
    Warning,
    Info,
}

/// One rule violation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    /// Stamped id of the offending element; `None` for document-level findings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_id: Option<String>,
    pub message: String,
    #[serde(rename = "type", default)]
    pub severity: Severity,
    #[serde(default)]
    pub details: serde_json::Value,
}

impl Finding {
    pub fn error(element_id: Option<String>, message: impl Into<String>, details: serde_json::Value) -> Self {
        Self {
            element_id,
            message: message.into(),
            severity: Severity::Error,
            details,
        }
    }
}
