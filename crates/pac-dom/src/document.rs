//! Document - High-level document API

use crate::{DomTree, DomView, DomViewMut, NodeData, NodeId, NodeType};

/// Elements whose text never renders
const UNRENDERED: &[&str] = &["script", "style", "template", "noscript"];

/// HTML Document
#[derive(Debug, Clone)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Document URL
    url: String,
}

impl Document {
    /// Create a document with the basic html/head/body skeleton
    pub fn new(url: &str) -> Self {
        let mut tree = DomTree::new();

        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        tree.append_child(tree.root(), html);
        tree.append_child(html, head);
        tree.append_child(html, body);

        Self {
            tree,
            url: url.to_string(),
        }
    }

    /// Create an empty document (no structure)
    pub fn empty(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_string(),
        }
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get <head> element
    pub fn head(&self) -> Option<NodeId> {
        self.html_child("head")
    }

    /// Get <body> element
    pub fn body(&self) -> Option<NodeId> {
        self.html_child("body")
    }

    fn html_child(&self, tag: &str) -> Option<NodeId> {
        let html = self.document_element()?;
        self.tree
            .children(html)
            .find(|(_, node)| node.as_element().is_some_and(|e| e.name == tag))
            .map(|(id, _)| id)
    }

    /// Get element by ID
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.element_by_id(id)
    }

    /// Create a detached element
    pub fn create_element(&mut self, name: &str) -> NodeId {
        self.tree.create_element(name)
    }

    /// Create a detached text node
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.tree.create_text(text)
    }

    /// Append a child node
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        self.tree.append_child(parent, child)
    }

    /// Create an element, append it under `parent` and return it
    pub fn append_element(&mut self, parent: NodeId, name: &str) -> NodeId {
        let id = self.tree.create_element(name);
        self.tree.append_child(parent, id);
        id
    }

    /// Create a text node and append it under `parent`
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        let id = self.tree.create_text(text);
        self.tree.append_child(parent, id);
        id
    }

    /// Text that would render for `node`: script/style-like subtrees are
    /// skipped and whitespace runs collapse to one space.
    pub fn inner_text(&self, node: NodeId) -> String {
        let mut raw = String::new();
        self.collect_text(node, true, &mut raw);
        raw.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn collect_text(&self, node: NodeId, rendered_only: bool, out: &mut String) {
        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            let Some(current) = self.tree.get(id) else { continue };
            match &current.data {
                NodeData::Text(text) => out.push_str(text),
                NodeData::Element(elem)
                    if rendered_only && id != node && UNRENDERED.contains(&elem.name.as_str()) => {}
                _ => {
                    let children: Vec<NodeId> = self.tree.children(id).map(|(c, _)| c).collect();
                    stack.extend(children.into_iter().rev());
                }
            }
        }
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}

impl DomView for Document {
    fn roots(&self) -> Vec<NodeId> {
        self.children(self.tree.root())
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.tree.children(node).map(|(id, _)| id).collect()
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.tree.parent(node)
    }

    fn node_type(&self, node: NodeId) -> Option<NodeType> {
        self.tree.get(node).map(|n| n.node_type())
    }

    fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.tree
            .get(node)
            .and_then(|n| n.as_element())
            .map(|e| e.name.as_str())
    }

    fn attributes(&self, node: NodeId) -> Vec<(&str, &str)> {
        self.tree
            .get(node)
            .and_then(|n| n.as_element())
            .map(|e| {
                e.attrs
                    .iter()
                    .map(|a| (a.name.as_str(), a.value.as_str()))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn get_attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.tree.get(node)?.as_element()?.get_attr(name)
    }

    fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, false, &mut out);
        out
    }

    fn rendered_text(&self, node: NodeId) -> Option<String> {
        self.tree.get(node)?.as_element()?;
        Some(self.inner_text(node))
    }
}

impl DomViewMut for Document {
    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> bool {
        match self.tree.get_mut(node).and_then(|n| n.as_element_mut()) {
            Some(elem) => {
                elem.set_attr(name, value);
                true
            }
            None => false,
        }
    }
}
