//! Rule kinds
//!
//! A rule group's `type` selects the [`RuleType`] that interprets its rules.
//! New kinds are added by registering them; the validator loop never
//! changes.

use std::collections::HashMap;
use std::sync::Arc;

use pac_dom::{DomView, NodeId};

use crate::aria::ARIA_REFERENCE_ATTRIBUTES;
use crate::handlers::{HandlerRegistry, references_resolve};
use crate::Rule;

/// What a rule check sees
pub struct RuleContext<'a> {
    pub dom: &'a dyn DomView,
    pub handlers: &'a HandlerRegistry,
}

/// Outcome of checking one rule against one element (or the document)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    /// Failed; extra `{name}` placeholders for the message template
    Fail(Vec<(&'static str, String)>),
    /// Failed with a message replacing the template
    FailWith(String),
    /// The rule could not be applied (already logged)
    Skip,
}

impl Verdict {
    pub fn from_check(ok: bool) -> Self {
        if ok { Verdict::Pass } else { Verdict::Fail(Vec::new()) }
    }
}

/// Interpretation strategy for one rule group type
pub trait RuleType: Send + Sync {
    /// `element` is `None` for rules without a selector
    fn check(&self, ctx: &RuleContext<'_>, rule: &Rule, element: Option<NodeId>) -> Verdict;
}

/// Rule kinds keyed by group `type`
#[derive(Clone, Default)]
pub struct RuleTypeRegistry {
    kinds: HashMap<String, Arc<dyn RuleType>>,
}

impl RuleTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in kind
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register("attributePresence", AttributePresence);
        registry.register("contentPresence", ContentPresence);
        registry.register("parentChild", ParentChild);
        registry.register("childSequence", ChildSequence);
        registry.register("ariaReference", AriaReference);
        for handler_backed in ["ariaAttributes", "labelAssociation", "documentProperties", "metaTags"] {
            registry.register(handler_backed, HandlerBacked);
        }
        registry
    }

    /// Add or replace a kind
    pub fn register(&mut self, rule_type: &str, kind: impl RuleType + 'static) {
        self.kinds.insert(rule_type.to_string(), Arc::new(kind));
    }

    pub fn get(&self, rule_type: &str) -> Option<&Arc<dyn RuleType>> {
        self.kinds.get(rule_type)
    }

    pub fn contains(&self, rule_type: &str) -> bool {
        self.kinds.contains_key(rule_type)
    }
}

impl std::fmt::Debug for RuleTypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut types: Vec<&String> = self.kinds.keys().collect();
        types.sort();
        f.debug_struct("RuleTypeRegistry").field("kinds", &types).finish()
    }
}

fn needs_selector(rule: &Rule) -> Verdict {
    tracing::warn!(rule = %rule.message, "rule needs a selector, skipping");
    Verdict::Skip
}

fn missing_parameter(rule: &Rule, parameter: &str) -> Verdict {
    tracing::warn!(rule = %rule.message, parameter, "rule is missing a parameter, skipping");
    Verdict::Skip
}

fn tag_in(tag: Option<&str>, allowed: &[String]) -> bool {
    tag.is_some_and(|t| allowed.iter().any(|a| a.eq_ignore_ascii_case(t)))
}

/// Attribute present with a value that is not just whitespace
fn has_non_blank(dom: &dyn DomView, element: NodeId, name: &str) -> bool {
    dom.get_attribute(element, name)
        .is_some_and(|v| !v.trim().is_empty())
}

fn any_fallback(dom: &dyn DomView, element: NodeId, rule: &Rule) -> bool {
    rule.details
        .fallback_attributes
        .iter()
        .flatten()
        .any(|name| has_non_blank(dom, element, name))
}

/// Every required attribute is present (non-blank when the rule says so),
/// unless an alternative attribute is present
pub struct AttributePresence;

impl RuleType for AttributePresence {
    fn check(&self, ctx: &RuleContext<'_>, rule: &Rule, element: Option<NodeId>) -> Verdict {
        let Some(element) = element else { return needs_selector(rule) };
        let Some(required) = rule.details.required_attributes.as_deref() else {
            return missing_parameter(rule, "requiredAttributes");
        };
        let dom = ctx.dom;

        let alternative = rule
            .details
            .alternative_attributes
            .iter()
            .flatten()
            .any(|name| dom.has_attribute(element, name));
        let all_present = required.iter().all(|name| {
            if rule.non_blank {
                has_non_blank(dom, element, name)
            } else {
                dom.has_attribute(element, name)
            }
        });
        Verdict::from_check(all_present || alternative)
    }
}

/// Trimmed text content is non-empty, or a fallback attribute carries a value
pub struct ContentPresence;

impl RuleType for ContentPresence {
    fn check(&self, ctx: &RuleContext<'_>, rule: &Rule, element: Option<NodeId>) -> Verdict {
        let Some(element) = element else { return needs_selector(rule) };
        if rule.allow_empty {
            return Verdict::Pass;
        }
        let has_text = !ctx.dom.text_content(element).trim().is_empty();
        Verdict::from_check(has_text || any_fallback(ctx.dom, element, rule))
    }
}

/// Immediate parent element is one of `validParents`
pub struct ParentChild;

impl RuleType for ParentChild {
    fn check(&self, ctx: &RuleContext<'_>, rule: &Rule, element: Option<NodeId>) -> Verdict {
        let Some(element) = element else { return needs_selector(rule) };
        let Some(valid) = rule.details.valid_parents.as_deref() else {
            return missing_parameter(rule, "validParents");
        };
        let dom = ctx.dom;
        let parent_tag = dom
            .parent(element)
            .filter(|&p| dom.is_element(p))
            .and_then(|p| dom.tag_name(p));
        Verdict::from_check(tag_in(parent_tag, valid))
    }
}

/// Either the first element child is one of `requiredFirstChild`, or some
/// descendant is one of `requiredChildren`
pub struct ChildSequence;

impl RuleType for ChildSequence {
    fn check(&self, ctx: &RuleContext<'_>, rule: &Rule, element: Option<NodeId>) -> Verdict {
        let Some(element) = element else { return needs_selector(rule) };
        let dom = ctx.dom;
        let details = &rule.details;

        let ok = if let Some(first) = details.required_first_child.as_deref() {
            let first_tag = dom
                .element_children(element)
                .first()
                .and_then(|&c| dom.tag_name(c));
            tag_in(first_tag, first)
        } else if let Some(children) = details.required_children.as_deref() {
            dom.descendant_elements(element)
                .into_iter()
                .any(|d| tag_in(dom.tag_name(d), children))
        } else {
            return missing_parameter(rule, "requiredFirstChild or requiredChildren");
        };
        Verdict::from_check(ok || any_fallback(dom, element, rule))
    }
}

/// Every ID referenced by the checked ARIA attributes exists. Fails on the
/// first attribute with an unresolved reference and names it as
/// `{attribute}`.
pub struct AriaReference;

impl RuleType for AriaReference {
    fn check(&self, ctx: &RuleContext<'_>, rule: &Rule, element: Option<NodeId>) -> Verdict {
        let Some(element) = element else { return needs_selector(rule) };
        let configured = rule.details.reference_attributes.as_deref();
        let default: Vec<String> = ARIA_REFERENCE_ATTRIBUTES.iter().map(|s| s.to_string()).collect();
        let attributes = configured.unwrap_or(&default);

        for attribute in attributes {
            if let Some(value) = ctx.dom.get_attribute(element, attribute) {
                if !references_resolve(ctx.dom, value) {
                    return Verdict::Fail(vec![("attribute", attribute.clone())]);
                }
            }
        }
        Verdict::Pass
    }
}

/// Delegates to the rule's named handler
pub struct HandlerBacked;

impl RuleType for HandlerBacked {
    fn check(&self, ctx: &RuleContext<'_>, rule: &Rule, element: Option<NodeId>) -> Verdict {
        let Some(handler_id) = rule.handler_id.as_deref() else {
            return missing_parameter(rule, "handlerId");
        };
        let Some(handler) = ctx.handlers.get(handler_id) else {
            tracing::warn!(handler_id, "no handler registered, rule skipped");
            return Verdict::Skip;
        };

        if handler.validate(ctx.dom, element) {
            Verdict::Pass
        } else {
            match handler.message(ctx.dom, element) {
                Some(message) => Verdict::FailWith(message),
                None => Verdict::Fail(Vec::new()),
            }
        }
    }
}
