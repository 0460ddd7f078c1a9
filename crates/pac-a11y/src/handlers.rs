//! Named rule handlers
//!
//! Checks that a selector and a few parameters cannot express live here,
//! registered under a `handlerId` that rules refer to.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use pac_dom::{DomView, NodeId};
use regex::Regex;

use crate::aria::is_valid_role_list;

static LANG_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z]{2,3}(-[a-zA-Z]{2,3})?$").unwrap());

/// Inclusive bounds for the meta description, in characters
pub const DESCRIPTION_MIN: usize = 50;
pub const DESCRIPTION_MAX: usize = 160;

/// Pass/fail check behind a handler-backed rule
pub trait RuleHandler: Send + Sync {
    /// `element` is `None` for document-level rules
    fn validate(&self, dom: &dyn DomView, element: Option<NodeId>) -> bool;

    /// Message replacing the rule's own, if the handler wants one
    fn message(&self, _dom: &dyn DomView, _element: Option<NodeId>) -> Option<String> {
        None
    }
}

/// Handlers keyed by id
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Arc<dyn RuleHandler>>,
}

impl HandlerRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in handler
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register("labelable", Labelable);
        registry.register("ariaRole", AriaRoleValue);
        registry.register("title", Title);
        registry.register("lang", Lang);
        registry.register("viewport", Viewport);
        registry.register("description", Description);
        registry.register("charset", Charset);
        registry
    }

    /// Add or replace a handler
    pub fn register(&mut self, id: &str, handler: impl RuleHandler + 'static) {
        self.handlers.insert(id.to_string(), Arc::new(handler));
    }

    pub fn get(&self, id: &str) -> Option<&Arc<dyn RuleHandler>> {
        self.handlers.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.handlers.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ids: Vec<&String> = self.handlers.keys().collect();
        ids.sort();
        f.debug_struct("HandlerRegistry").field("handlers", &ids).finish()
    }
}

/// Every ID in a whitespace-separated reference list resolves.
/// An empty list does not.
pub fn references_resolve(dom: &dyn DomView, value: &str) -> bool {
    let mut ids = value.split_ascii_whitespace().peekable();
    ids.peek().is_some() && ids.all(|id| dom.element_by_id(id).is_some())
}

/// `element.labels` is non-empty: a `<label for>` pointing at the element,
/// or an enclosing `<label>` without `for`
fn has_label(dom: &dyn DomView, element: NodeId) -> bool {
    if let Some(id) = dom.get_attribute(element, "id").filter(|id| !id.is_empty()) {
        let pointed_at = dom.elements().into_iter().any(|el| {
            dom.tag_name(el) == Some("label") && dom.get_attribute(el, "for") == Some(id)
        });
        if pointed_at {
            return true;
        }
    }
    let mut current = dom.parent(element);
    while let Some(ancestor) = current {
        if dom.tag_name(ancestor) == Some("label") {
            return !dom.has_attribute(ancestor, "for");
        }
        current = dom.parent(ancestor);
    }
    false
}

/// First `<meta name=...>` in document order
fn meta_content<'a>(dom: &'a dyn DomView, name: &str) -> Option<&'a str> {
    dom.elements()
        .into_iter()
        .find(|&el| dom.tag_name(el) == Some("meta") && dom.get_attribute(el, "name") == Some(name))
        .and_then(|meta| dom.get_attribute(meta, "content"))
}

/// Labelable form control has a label, an `aria-label`, or an
/// `aria-labelledby` that resolves
pub struct Labelable;

impl RuleHandler for Labelable {
    fn validate(&self, dom: &dyn DomView, element: Option<NodeId>) -> bool {
        let Some(element) = element else { return true };
        has_label(dom, element)
            || dom.has_attribute(element, "aria-label")
            || dom
                .get_attribute(element, "aria-labelledby")
                .is_some_and(|ids| references_resolve(dom, ids))
    }
}

/// `role` holds only known ARIA roles
pub struct AriaRoleValue;

impl RuleHandler for AriaRoleValue {
    fn validate(&self, dom: &dyn DomView, element: Option<NodeId>) -> bool {
        let Some(element) = element else { return true };
        dom.get_attribute(element, "role")
            .is_none_or(is_valid_role_list)
    }
}

/// Non-empty document title
pub struct Title;

impl RuleHandler for Title {
    fn validate(&self, dom: &dyn DomView, _element: Option<NodeId>) -> bool {
        !dom.title().trim().is_empty()
    }
}

/// `<html lang>` is a 2-3 letter code with an optional 2-3 letter subtag
pub struct Lang;

impl RuleHandler for Lang {
    fn validate(&self, dom: &dyn DomView, _element: Option<NodeId>) -> bool {
        dom.document_element()
            .and_then(|html| dom.get_attribute(html, "lang"))
            .is_some_and(|lang| LANG_CODE_RE.is_match(lang))
    }
}

/// Viewport meta with both `width=` and `initial-scale=`
pub struct Viewport;

impl RuleHandler for Viewport {
    fn validate(&self, dom: &dyn DomView, _element: Option<NodeId>) -> bool {
        meta_content(dom, "viewport")
            .is_some_and(|content| content.contains("width=") && content.contains("initial-scale="))
    }
}

/// Meta description of 50 to 160 characters
pub struct Description;

impl RuleHandler for Description {
    fn validate(&self, dom: &dyn DomView, _element: Option<NodeId>) -> bool {
        meta_content(dom, "description")
            .map(|content| content.chars().count())
            .is_some_and(|len| (DESCRIPTION_MIN..=DESCRIPTION_MAX).contains(&len))
    }

    fn message(&self, dom: &dyn DomView, _element: Option<NodeId>) -> Option<String> {
        Some(match meta_content(dom, "description").filter(|c| !c.is_empty()) {
            None => "Meta description is required".to_string(),
            Some(content) => format!(
                "Meta description must be between {DESCRIPTION_MIN}-{DESCRIPTION_MAX} characters (currently {})",
                content.chars().count()
            ),
        })
    }
}

/// Some `<meta charset>` exists; its value is not inspected
pub struct Charset;

impl RuleHandler for Charset {
    fn validate(&self, dom: &dyn DomView, _element: Option<NodeId>) -> bool {
        dom.elements()
            .into_iter()
            .any(|el| dom.tag_name(el) == Some("meta") && dom.has_attribute(el, "charset"))
    }
}
