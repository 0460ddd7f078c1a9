//! HTML5 Parser implementation
//!
//! Uses html5ever's RcDom and converts it to the arena DOM.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};
use pac_dom::{Document, DomTree, DomView, ElementData, NodeData, NodeId};

use crate::ParseError;

/// HTML5 parser
pub struct HtmlParser;

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self
    }

    /// Parse HTML string into a Document
    pub fn parse(&self, html: &str) -> Result<Document, ParseError> {
        self.parse_with_url(html, "about:blank")
    }

    /// Parse HTML with a document URL
    pub fn parse_with_url(&self, html: &str, url: &str) -> Result<Document, ParseError> {
        tracing::debug!("Parsing HTML document: {}", url);

        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())?;

        let mut document = Document::empty(url);
        convert_document(&dom.document, document.tree_mut());

        tracing::debug!("Parsed {} nodes", document.tree().len());
        Ok(document)
    }

    /// Parse a body fragment. Returns the document together with the
    /// elements that ended up as direct children of `<body>`.
    pub fn parse_fragment(&self, html: &str) -> Result<(Document, Vec<NodeId>), ParseError> {
        let document = self.parse(html)?;
        let top = document
            .body()
            .map(|body| document.element_children(body))
            .unwrap_or_default();
        Ok((document, top))
    }
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy the RcDom tree into the arena, depth first with an explicit
/// stack so nesting depth is bounded only by memory
fn convert_document(document: &Handle, tree: &mut DomTree) {
    let mut stack: Vec<(Handle, NodeId)> = document
        .children
        .borrow()
        .iter()
        .rev()
        .map(|child| (child.clone(), NodeId::ROOT))
        .collect();
    while let Some((handle, parent)) = stack.pop() {
        if let Some(id) = convert_node(&handle, tree, parent) {
            stack.extend(handle.children.borrow().iter().rev().map(|child| (child.clone(), id)));
        }
    }
}

/// Copy one RcDom node under `parent`. Returns the new id when the node
/// can have children.
fn convert_node(handle: &Handle, tree: &mut DomTree, parent: NodeId) -> Option<NodeId> {
    let id = match &handle.data {
        RcNodeData::Document => return Some(parent),
        RcNodeData::Doctype { name, public_id, system_id } => tree.create_node(NodeData::Doctype {
            name: name.to_string(),
            public_id: public_id.to_string(),
            system_id: system_id.to_string(),
        }),
        // Whitespace-only runs are kept: they are real DOM text nodes
        RcNodeData::Text { contents } => tree.create_text(&contents.borrow()),
        RcNodeData::Comment { contents } => tree.create_comment(contents),
        RcNodeData::Element { name, attrs, .. } => {
            let mut elem = ElementData::new(&name.local);
            for attr in attrs.borrow().iter() {
                elem.set_attr(&attr.name.local, attr.value.to_string());
            }
            let id = tree.create_node(NodeData::Element(elem));
            tree.append_child(parent, id);
            return Some(id);
        }
        RcNodeData::ProcessingInstruction { target, contents } => {
            tree.create_node(NodeData::ProcessingInstruction {
                target: target.to_string(),
                data: contents.to_string(),
            })
        }
    };
    tree.append_child(parent, id);
    None
}
