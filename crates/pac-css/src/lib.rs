//! pac CSS Selectors
//!
//! Selector parsing (via lightningcss) and matching over any [`DomView`]. Covers the subset
//! rule configurations use: type, universal, id, class and attribute
//! selectors, structural pseudo-classes, `:not()`, and the descendant and
//! child combinators.

mod selectors;
mod parser;
mod matching;

pub use selectors::{
    AttributeMatcher, AttributeSelector, Combinator, ComplexSelector, CompoundSelector,
    PseudoClass, SelectorComponent, SelectorList,
};
pub use parser::parse_selector_list;

use pac_dom::{DomView, NodeId};

/// All elements matching `selectors`, in document order
pub fn query_selector_all<D: DomView + ?Sized>(dom: &D, selectors: &SelectorList) -> Vec<NodeId> {
    dom.elements()
        .into_iter()
        .filter(|&el| selectors.matches(dom, el))
        .collect()
}

/// First element in document order matching `selectors`
pub fn query_selector<D: DomView + ?Sized>(dom: &D, selectors: &SelectorList) -> Option<NodeId> {
    dom.elements()
        .into_iter()
        .find(|&el| selectors.matches(dom, el))
}

/// `Element.matches(selector)` for a selector given as text
pub fn matches<D: DomView + ?Sized>(dom: &D, node: NodeId, selector: &str) -> Result<bool, SelectorError> {
    let list = parse_selector_list(selector)?;
    Ok(list.matches(dom, node))
}

/// Selector parsing error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("Empty selector")]
    Empty,

    #[error("Invalid selector: {0}")]
    Syntax(String),

    #[error("Unsupported pseudo-class :{0}")]
    UnsupportedPseudoClass(String),

    #[error("Unsupported selector: {0}")]
    Unsupported(String),
}
