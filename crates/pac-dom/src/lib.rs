//! pac DOM - Document Object Model
//!
//! Arena-allocated DOM tree plus the [`DomView`] abstraction the tree
//! builder, selector engine and validator are written against.

mod node;
mod tree;
mod document;
mod view;
mod stamp;

pub use node::{Attribute, ElementData, Node, NodeData, NodeType};
pub use tree::{Children, DomTree};
pub use document::Document;
pub use view::{DomView, DomViewMut};
pub use stamp::{StampAttribute, DEFAULT_INSTANCE};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Document node of an arena tree
    pub const ROOT: NodeId = NodeId(0);
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Wrap a raw handle. Foreign [`DomView`] implementations use this to
    /// map their own node handles onto ids.
    pub const fn new(raw: u32) -> Self {
        NodeId(raw)
    }

    /// Raw handle value
    pub const fn index(self) -> u32 {
        self.0
    }

    /// Check this is not the `NONE` sentinel
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }
}
