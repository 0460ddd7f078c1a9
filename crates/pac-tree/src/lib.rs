//! pac Tree Builder
//!
//! Depth-first snapshot of the "interesting" structure of a document.
//! Every captured element gets a unique id, stamped back onto the element
//! so validation findings can later be joined onto the tree.

mod node;
mod ids;
mod builder;
mod search;

pub use node::{Finding, Severity, TreeNode};
pub use ids::{IdGenerator, SequentialIds, TimestampIds, ID_LEN};
pub use builder::{
    ATTRIBUTES_OF_INTEREST, MAX_DEPTH, STRUCTURAL_TAGS, TEXT_TAGS, TreeBuilder, is_structural_element,
};
pub use search::{TagMatch, find_all_nodes_with_tag};

use pac_dom::DomViewMut;

/// Build the forest for a whole document with default settings
pub fn scan_document<D: DomViewMut + ?Sized>(dom: &mut D) -> Vec<TreeNode> {
    TreeBuilder::new().scan_document(dom)
}
