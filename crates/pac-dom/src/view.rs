//! Document-like view
//!
//! The scanner never touches a concrete DOM type directly. Everything it
//! needs from a document goes through [`DomView`], so the same logic runs
//! against the bundled arena [`Document`](crate::Document), a foreign DOM
//! emulation, or a hand-built fixture.
//!
//! Unknown ids are a normal condition, not an error: accessors answer with
//! empty collections or `None` and callers keep walking.

use crate::{NodeId, NodeType};

/// Read access to a DOM-like document
pub trait DomView {
    /// Top-level children of the document, in document order
    fn roots(&self) -> Vec<NodeId>;

    /// Direct children of a node (all node types), in document order
    fn children(&self, node: NodeId) -> Vec<NodeId>;

    /// Parent of a node. For roots this is the document node when the
    /// implementation has one (the bundled [`Document`](crate::Document)
    /// does), otherwise `None`. Unknown and detached ids give `None`.
    /// Callers wanting a parent element filter with [`is_element`](Self::is_element).
    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// DOM node type; `None` for unknown ids
    fn node_type(&self, node: NodeId) -> Option<NodeType>;

    /// Lower-cased tag name for elements
    fn tag_name(&self, node: NodeId) -> Option<&str>;

    /// Attributes of an element in source order
    fn attributes(&self, node: NodeId) -> Vec<(&str, &str)>;

    /// Raw concatenated text of all descendant text nodes
    fn text_content(&self, node: NodeId) -> String;

    /// Text as a user would see it, when the implementation can tell
    fn rendered_text(&self, _node: NodeId) -> Option<String> {
        None
    }

    /// Attribute value by ASCII case-insensitive name
    fn get_attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.attributes(node)
            .into_iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }

    fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.get_attribute(node, name).is_some()
    }

    fn is_element(&self, node: NodeId) -> bool {
        self.node_type(node) == Some(NodeType::Element)
    }

    /// Element children only
    fn element_children(&self, node: NodeId) -> Vec<NodeId> {
        self.children(node)
            .into_iter()
            .filter(|&c| self.is_element(c))
            .collect()
    }

    /// Every element below `node` in pre-order, `node` excluded
    fn descendant_elements(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.element_children(node).into_iter().rev().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.element_children(id).into_iter().rev());
        }
        out
    }

    /// Every element of the document in document order
    fn elements(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        for root in self.roots() {
            if self.is_element(root) {
                out.push(root);
                out.extend(self.descendant_elements(root));
            }
        }
        out
    }

    /// First element child of the document (usually `<html>`)
    fn document_element(&self) -> Option<NodeId> {
        self.roots().into_iter().find(|&r| self.is_element(r))
    }

    /// `document.getElementById`: first element in document order whose
    /// `id` equals `id`. The empty id never resolves.
    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        self.elements()
            .into_iter()
            .find(|&e| self.get_attribute(e, "id") == Some(id))
    }

    /// `document.title`: text of the first `<title>`, whitespace collapsed
    fn title(&self) -> String {
        self.elements()
            .into_iter()
            .find(|&e| self.tag_name(e) == Some("title"))
            .map(|t| {
                self.text_content(t)
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .unwrap_or_default()
    }
}

/// Write access needed for identity stamping
pub trait DomViewMut: DomView {
    /// Set an attribute on an element. Returns false for non-elements.
    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> bool;
}
