//! Comprehensive tests for pac-dom
//!
//! Exercises the provided `DomView` methods against both the arena
//! document and a minimal foreign implementation.

use pac_dom::{Document, DomView, DomViewMut, NodeId, NodeType, StampAttribute};

/// Flat fixture: every node is an element described by (tag, parent, attrs)
struct Flat {
    nodes: Vec<(&'static str, Option<usize>, Vec<(&'static str, &'static str)>, &'static str)>,
}

impl DomView for Flat {
    fn roots(&self) -> Vec<NodeId> {
        (0..self.nodes.len())
            .filter(|&i| self.nodes[i].1.is_none())
            .map(|i| NodeId::new(i as u32))
            .collect()
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        (0..self.nodes.len())
            .filter(|&i| self.nodes[i].1 == Some(node.index() as usize))
            .map(|i| NodeId::new(i as u32))
            .collect()
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes
            .get(node.index() as usize)?
            .1
            .map(|p| NodeId::new(p as u32))
    }

    fn node_type(&self, node: NodeId) -> Option<NodeType> {
        self.nodes.get(node.index() as usize).map(|_| NodeType::Element)
    }

    fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node.index() as usize).map(|n| n.0)
    }

    fn attributes(&self, node: NodeId) -> Vec<(&str, &str)> {
        self.nodes
            .get(node.index() as usize)
            .map(|n| n.2.clone())
            .unwrap_or_default()
    }

    fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        if let Some(n) = self.nodes.get(node.index() as usize) {
            out.push_str(n.3);
        }
        for child in self.children(node) {
            out.push_str(&self.text_content(child));
        }
        out
    }
}

fn flat() -> Flat {
    Flat {
        nodes: vec![
            ("html", None, vec![("lang", "en")], ""),
            ("head", Some(0), vec![], ""),
            ("title", Some(1), vec![], "  My   page "),
            ("body", Some(0), vec![], ""),
            ("div", Some(3), vec![("ID", "box")], ""),
            ("p", Some(4), vec![], "one"),
            ("p", Some(3), vec![("id", "box")], "two"),
        ],
    }
}

#[test]
fn test_foreign_view_defaults() {
    let dom = flat();
    assert_eq!(dom.document_element(), Some(NodeId::new(0)));
    assert_eq!(dom.title(), "My page");
    assert_eq!(dom.get_attribute(NodeId::new(0), "LANG"), Some("en"));
    assert!(dom.rendered_text(NodeId::new(5)).is_none());
}

#[test]
fn test_elements_in_document_order() {
    let dom = flat();
    let tags: Vec<&str> = dom
        .elements()
        .into_iter()
        .filter_map(|e| dom.tag_name(e))
        .collect();
    assert_eq!(tags, vec!["html", "head", "title", "body", "div", "p", "p"]);
}

#[test]
fn test_element_by_id_first_match_wins() {
    let dom = flat();
    // attribute names are case-insensitive, values are not
    assert_eq!(dom.element_by_id("box"), Some(NodeId::new(4)));
    assert_eq!(dom.element_by_id("BOX"), None);
}

#[test]
fn test_root_parent_is_document_node() {
    let doc = Document::new("about:blank");
    let html = doc.document_element().unwrap();
    let parent = doc.parent(html).unwrap();
    assert_eq!(doc.node_type(parent), Some(NodeType::Document));
    assert!(!doc.is_element(parent));
    assert_eq!(doc.parent(parent), None);
}

#[test]
fn test_unknown_ids_are_quiet() {
    let doc = Document::new("about:blank");
    let bogus = NodeId::new(10_000);
    assert!(doc.children(bogus).is_empty());
    assert!(doc.attributes(bogus).is_empty());
    assert_eq!(doc.parent(bogus), None);
    assert_eq!(doc.node_type(bogus), None);
    assert_eq!(doc.text_content(bogus), "");
}

#[test]
fn test_descendants_skip_text() {
    let mut doc = Document::new("about:blank");
    let body = doc.body().unwrap();
    let ul = doc.append_element(body, "ul");
    doc.append_text(ul, "\n  ");
    let li = doc.append_element(ul, "li");
    doc.append_text(li, "Item");

    assert_eq!(doc.element_children(ul), vec![li]);
    assert_eq!(doc.descendant_elements(body), vec![ul, li]);
    assert_eq!(doc.children(ul).len(), 2);
    assert_eq!(doc.node_type(doc.children(ul)[0]), Some(NodeType::Text));
}

#[test]
fn test_stamp_on_non_element_fails() {
    let mut doc = Document::new("about:blank");
    let body = doc.body().unwrap();
    let text = doc.append_text(body, "x");
    let stamp = StampAttribute::default();

    assert!(!stamp.write(&mut doc, text, "abc"));
    assert!(!doc.set_attribute(NodeId::new(999), "id", "x"));
    assert_eq!(stamp.read(&doc, text), None);
}
