//! Selector matching against a [`DomView`]
//!
//! Complex selectors match right to left: the rightmost compound must
//! match the subject, then each combinator walks up the ancestor chain,
//! backtracking through descendant combinators.

use pac_dom::{DomView, NodeId, NodeType};

use crate::selectors::{
    Combinator, ComplexSelector, CompoundSelector, PseudoClass, SelectorComponent, SelectorList,
};

impl SelectorList {
    /// Check if `node` matches any selector of the list
    pub fn matches<D: DomView + ?Sized>(&self, dom: &D, node: NodeId) -> bool {
        dom.is_element(node) && self.selectors.iter().any(|sel| sel.matches(dom, node))
    }
}

impl ComplexSelector {
    pub fn matches<D: DomView + ?Sized>(&self, dom: &D, node: NodeId) -> bool {
        match self.compounds.len() {
            0 => false,
            len => self.match_from(dom, node, len - 1),
        }
    }

    fn match_from<D: DomView + ?Sized>(&self, dom: &D, node: NodeId, idx: usize) -> bool {
        if !self.compounds[idx].matches(dom, node) {
            return false;
        }
        if idx == 0 {
            return true;
        }
        match self.combinators[idx - 1] {
            Combinator::Child => {
                parent_element(dom, node).is_some_and(|p| self.match_from(dom, p, idx - 1))
            }
            Combinator::Descendant => {
                let mut current = parent_element(dom, node);
                while let Some(ancestor) = current {
                    if self.match_from(dom, ancestor, idx - 1) {
                        return true;
                    }
                    current = parent_element(dom, ancestor);
                }
                false
            }
        }
    }
}

impl CompoundSelector {
    pub fn matches<D: DomView + ?Sized>(&self, dom: &D, node: NodeId) -> bool {
        self.components.iter().all(|c| match_component(dom, node, c))
    }
}

/// Match a selector component against an element
fn match_component<D: DomView + ?Sized>(dom: &D, node: NodeId, component: &SelectorComponent) -> bool {
    match component {
        SelectorComponent::Universal => true,
        SelectorComponent::Type(tag) => dom.tag_name(node).is_some_and(|t| t.eq_ignore_ascii_case(tag)),
        SelectorComponent::Id(id) => dom.get_attribute(node, "id") == Some(id.as_str()),
        SelectorComponent::Class(class) => dom
            .get_attribute(node, "class")
            .is_some_and(|classes| classes.split_ascii_whitespace().any(|c| c == class)),
        SelectorComponent::Attribute(attr) => attr.matches(dom.get_attribute(node, &attr.name)),
        SelectorComponent::PseudoClass(pseudo) => match_pseudo_class(dom, node, pseudo),
    }
}

/// Match a pseudo-class against an element
fn match_pseudo_class<D: DomView + ?Sized>(dom: &D, node: NodeId, pseudo: &PseudoClass) -> bool {
    match pseudo {
        PseudoClass::Root => parent_element(dom, node).is_none(),
        PseudoClass::Empty => dom.children(node).into_iter().all(|child| match dom.node_type(child) {
            Some(NodeType::Element) => false,
            Some(NodeType::Text) => dom.text_content(child).is_empty(),
            _ => true,
        }),
        PseudoClass::FirstChild => siblings(dom, node).first() == Some(&node),
        PseudoClass::LastChild => siblings(dom, node).last() == Some(&node),
        PseudoClass::OnlyChild => siblings(dom, node) == [node],
        PseudoClass::Not(inner) => !inner.iter().any(|c| c.matches(dom, node)),
    }
}

fn parent_element<D: DomView + ?Sized>(dom: &D, node: NodeId) -> Option<NodeId> {
    dom.parent(node).filter(|&p| dom.is_element(p))
}

/// Element siblings of `node`, itself included
fn siblings<D: DomView + ?Sized>(dom: &D, node: NodeId) -> Vec<NodeId> {
    match dom.parent(node) {
        Some(parent) => dom.element_children(parent),
        None => dom.roots().into_iter().filter(|&r| dom.is_element(r)).collect(),
    }
}
