//! Finding merge
//!
//! Joins validator output onto the tree through the stamped ids.

use pac_tree::{Finding, TreeNode};

/// Attach each finding to the node whose `id` equals its `element_id`.
///
/// Findings keep their relative order on each node. Findings without an
/// element id, or whose element never made it into the tree, come back
/// in the returned vector.
pub fn merge_findings(forest: &mut [TreeNode], findings: Vec<Finding>) -> Vec<Finding> {
    let mut unattached = Vec::new();
    for finding in findings {
        let target = finding
            .element_id
            .as_deref()
            .and_then(|id| forest.iter_mut().find_map(|root| root.find_mut(id)));
        match target {
            Some(node) => node.validation.push(finding),
            None => unattached.push(finding),
        }
    }
    if !unattached.is_empty() {
        tracing::debug!(count = unattached.len(), "findings left unattached");
    }
    unattached
}
