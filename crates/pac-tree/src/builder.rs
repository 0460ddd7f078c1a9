//! Tree construction
//!
//! Only allow-listed elements are captured. Filtering is not transparent:
//! once an element is skipped, nothing below it is visited, and `script`
//! subtrees are never entered at all.

use std::collections::HashSet;

use pac_dom::{DomView, DomViewMut, NodeId, StampAttribute};

use crate::ids::{IdGenerator, TimestampIds};
use crate::TreeNode;

/// Tags captured in the tree
pub const STRUCTURAL_TAGS: &[&str] = &[
    "a", "address", "area", "article", "aside", "audio", "blockquote", "body", "br", "button",
    "canvas", "caption", "cite", "col", "colgroup", "dd", "details", "dialog", "div", "dl", "dt",
    "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6",
    "head", "header", "hgroup", "hr", "html", "iframe", "img", "input", "label", "legend", "li",
    "link", "main", "map", "menu", "meta", "nav", "ol", "option", "output", "p", "picture", "pre",
    "progress", "script", "search", "section", "select", "source", "span", "style", "summary",
    "svg", "table", "tbody", "td", "textarea", "tfoot", "th", "thead", "title", "tr", "track",
    "ul", "video",
];

/// Tags whose text is captured as `elementText`
pub const TEXT_TAGS: &[&str] = &[
    "a", "button", "dd", "div", "dt", "h1", "h2", "h3", "h4", "h5", "h6", "label", "li", "p",
    "span", "td", "textarea",
];

/// Attributes copied onto tree nodes, in output order
pub const ATTRIBUTES_OF_INTEREST: &[&str] = &["alt", "id", "class"];

/// Levels captured per build, the build root included
pub const MAX_DEPTH: usize = 512;

/// True for element nodes whose tag is in [`STRUCTURAL_TAGS`]
pub fn is_structural_element<D: DomView + ?Sized>(dom: &D, node: NodeId) -> bool {
    dom.is_element(node)
        && dom
            .tag_name(node)
            .is_some_and(|tag| STRUCTURAL_TAGS.contains(&tag.to_ascii_lowercase().as_str()))
}

/// Builds [`TreeNode`] forests and stamps ids onto the document
pub struct TreeBuilder {
    ids: Box<dyn IdGenerator>,
    stamp: StampAttribute,
    issued: HashSet<String>,
}

impl TreeBuilder {
    /// Timestamp ids, default stamp attribute
    pub fn new() -> Self {
        Self::with_generator(TimestampIds)
    }

    pub fn with_generator(ids: impl IdGenerator + 'static) -> Self {
        Self {
            ids: Box::new(ids),
            stamp: StampAttribute::default(),
            issued: HashSet::new(),
        }
    }

    /// Use a different stamp attribute
    pub fn with_stamp(mut self, stamp: StampAttribute) -> Self {
        self.stamp = stamp;
        self
    }

    pub fn stamp(&self) -> &StampAttribute {
        &self.stamp
    }

    /// Next id, never one already issued during the current build
    pub fn generate_id(&mut self) -> String {
        let mut id = self.ids.next_id();
        let mut redraws = 0;
        while self.issued.contains(&id) {
            redraws += 1;
            id = if redraws < 8 {
                self.ids.next_id()
            } else {
                // generator keeps repeating itself; salt the tail
                let salt = format!("{:x}", self.issued.len() + redraws);
                let keep = id.chars().count().saturating_sub(salt.len());
                id.chars().take(keep).chain(salt.chars()).collect()
            };
        }
        self.issued.insert(id.clone());
        id
    }

    /// Capture one element and stamp its id. Children are left empty.
    pub fn create_node<D: DomViewMut + ?Sized>(&mut self, dom: &mut D, element: NodeId) -> TreeNode {
        let tag = dom
            .tag_name(element)
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let attributes = ATTRIBUTES_OF_INTEREST
            .iter()
            .filter_map(|&name| {
                dom.get_attribute(element, name)
                    .map(|value| (name.to_string(), value.to_string()))
            })
            .collect();
        let element_text = element_text(&*dom, element, &tag);

        let id = self.generate_id();
        if !self.stamp.write(dom, element, &id) {
            tracing::debug!(?element, "could not stamp node id");
        }

        TreeNode {
            id,
            tag,
            attributes,
            element_text,
            validation: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Capture `element` and its structural descendants. `None` for
    /// `script` elements and for anything that is not an element.
    ///
    /// Starts a new build: ids are unique within it, not across builds.
    pub fn build_subtree<D: DomViewMut + ?Sized>(&mut self, dom: &mut D, element: NodeId) -> Option<TreeNode> {
        self.issued.clear();
        self.build_at(dom, element, 0)
    }

    fn build_at<D: DomViewMut + ?Sized>(&mut self, dom: &mut D, element: NodeId, depth: usize) -> Option<TreeNode> {
        let Some(tag) = dom.tag_name(element) else {
            tracing::debug!(?element, "skipping non-element node");
            return None;
        };
        if tag.eq_ignore_ascii_case("script") {
            return None;
        }

        let mut node = self.create_node(dom, element);
        let children = dom.children(element);
        if depth + 1 >= MAX_DEPTH {
            if children.iter().any(|&c| is_structural_element(&*dom, c)) {
                tracing::debug!(?element, depth, "nesting limit reached, descendants dropped");
            }
            return Some(node);
        }
        for child in children {
            if !is_structural_element(&*dom, child) {
                continue;
            }
            if let Some(subtree) = self.build_at(dom, child, depth + 1) {
                node.children.push(subtree);
            }
        }
        Some(node)
    }

    /// Build one subtree per top-level element of the document
    pub fn scan_document<D: DomViewMut + ?Sized>(&mut self, dom: &mut D) -> Vec<TreeNode> {
        self.issued.clear();
        let roots: Vec<NodeId> = dom
            .roots()
            .into_iter()
            .filter(|&root| dom.is_element(root))
            .collect();
        let forest: Vec<TreeNode> = roots
            .into_iter()
            .filter_map(|root| self.build_at(dom, root, 0))
            .collect();
        tracing::debug!(nodes = forest.iter().map(TreeNode::len).sum::<usize>(), "tree built");
        forest
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// `innerText || textContent`, trimmed, for text-bearing tags only
fn element_text<D: DomView + ?Sized>(dom: &D, element: NodeId, tag: &str) -> String {
    if !TEXT_TAGS.contains(&tag) {
        return String::new();
    }
    dom.rendered_text(element)
        .filter(|text| !text.trim().is_empty())
        .unwrap_or_else(|| dom.text_content(element))
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SequentialIds;
    use pac_dom::Document;

    /// Always returns the same id
    struct Stuck;

    impl IdGenerator for Stuck {
        fn next_id(&mut self) -> String {
            "aaaaaaaaaaaaaaaa".to_string()
        }
    }

    #[test]
    fn test_structural_check() {
        let mut doc = Document::new("about:blank");
        let body = doc.body().unwrap();
        let div = doc.append_element(body, "div");
        let custom = doc.append_element(body, "my-widget");
        let text = doc.append_text(body, "x");

        assert!(is_structural_element(&doc, div));
        assert!(!is_structural_element(&doc, custom));
        assert!(!is_structural_element(&doc, text));
    }

    #[test]
    fn test_generate_id_never_repeats() {
        let mut builder = TreeBuilder::with_generator(Stuck);
        let ids: HashSet<String> = (0..50).map(|_| builder.generate_id()).collect();
        assert_eq!(ids.len(), 50);
        assert!(ids.iter().all(|id| id.len() == 16));
    }

    #[test]
    fn test_each_build_starts_a_fresh_id_set() {
        let mut doc = Document::new("about:blank");
        let body = doc.body().unwrap();
        let div = doc.append_element(body, "div");

        let mut builder = TreeBuilder::with_generator(Stuck);
        let first = builder.build_subtree(&mut doc, div).unwrap();
        let second = builder.build_subtree(&mut doc, div).unwrap();
        assert_eq!(first.id, "aaaaaaaaaaaaaaaa");
        assert_eq!(second.id, first.id);
    }

    #[test]
    fn test_nesting_limit() {
        let mut doc = Document::new("about:blank");
        let mut parent = doc.body().unwrap();
        for _ in 0..MAX_DEPTH + 10 {
            parent = doc.append_element(parent, "div");
        }

        let forest = TreeBuilder::with_generator(SequentialIds::new()).scan_document(&mut doc);
        // html, then head and body, then divs for the remaining levels
        assert_eq!(forest[0].len(), 3 + (MAX_DEPTH - 2));
        assert!(doc.get_attribute(parent, "data-pac").is_none());
    }

    #[test]
    fn test_create_node_stamps_element() {
        let mut doc = Document::new("about:blank");
        let body = doc.body().unwrap();
        let img = doc.append_element(body, "IMG");
        doc.set_attribute(img, "class", "hero");
        doc.set_attribute(img, "src", "x.jpg");
        doc.set_attribute(img, "alt", "x image");

        let mut builder = TreeBuilder::with_generator(SequentialIds::new());
        let node = builder.create_node(&mut doc, img);

        assert_eq!(node.tag, "img");
        assert_eq!(
            node.attributes,
            vec![
                ("alt".to_string(), "x image".to_string()),
                ("class".to_string(), "hero".to_string()),
            ]
        );
        assert_eq!(node.element_text, "");
        assert!(node.children.is_empty() && node.validation.is_empty());
        assert_eq!(doc.get_attribute(img, "data-pac"), Some(node.id.as_str()));
    }

    #[test]
    fn test_text_falls_back_to_text_content() {
        let mut doc = Document::new("about:blank");
        let body = doc.body().unwrap();
        let p = doc.append_element(body, "p");
        let style = doc.append_element(p, "style");
        doc.append_text(style, " only hidden text ");

        // nothing renders, so raw text content is used
        assert_eq!(element_text(&doc, p, "p"), "only hidden text");
    }
}
