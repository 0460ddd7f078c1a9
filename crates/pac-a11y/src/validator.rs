//! Validator
//!
//! Walks the rule configuration in category order and reports a finding
//! for every (rule, element) pair that fails. Findings carry the element's
//! stamped tree id so they can be joined back onto the tree.

use pac_css::{SelectorList, query_selector_all};
use pac_dom::{DomView, NodeId, StampAttribute};
use pac_tree::Finding;

use crate::kinds::{RuleContext, RuleType, Verdict};
use crate::{Category, HandlerRegistry, Rule, RuleConfig, RuleTypeRegistry};

/// Optional scoping of one `validate()` call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationFilter {
    pub category: Option<Category>,
    pub rule_type: Option<String>,
}

impl ValidationFilter {
    /// No filtering
    pub fn all() -> Self {
        Self::default()
    }

    pub fn category(category: Category) -> Self {
        Self {
            category: Some(category),
            rule_type: None,
        }
    }

    pub fn rule_type(rule_type: &str) -> Self {
        Self {
            category: None,
            rule_type: Some(rule_type.to_string()),
        }
    }

    fn admits(&self, category: Category, rule_type: &str) -> bool {
        self.category.is_none_or(|c| c == category)
            && self.rule_type.as_deref().is_none_or(|t| t == rule_type)
    }
}

/// Rule validator
#[derive(Debug, Clone)]
pub struct Validator {
    config: RuleConfig,
    kinds: RuleTypeRegistry,
    handlers: HandlerRegistry,
    stamp: StampAttribute,
}

impl Validator {
    /// Validator with the built-in rule kinds and handlers
    pub fn new(config: RuleConfig) -> Self {
        Self {
            config,
            kinds: RuleTypeRegistry::standard(),
            handlers: HandlerRegistry::standard(),
            stamp: StampAttribute::default(),
        }
    }

    pub fn with_handlers(mut self, handlers: HandlerRegistry) -> Self {
        self.handlers = handlers;
        self
    }

    pub fn with_kinds(mut self, kinds: RuleTypeRegistry) -> Self {
        self.kinds = kinds;
        self
    }

    /// Read element ids from a different stamp attribute
    pub fn with_stamp(mut self, stamp: StampAttribute) -> Self {
        self.stamp = stamp;
        self
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    pub fn handlers_mut(&mut self) -> &mut HandlerRegistry {
        &mut self.handlers
    }

    pub fn kinds_mut(&mut self) -> &mut RuleTypeRegistry {
        &mut self.kinds
    }

    /// Run every rule admitted by `filter`. Findings come out in category,
    /// then rule, then document order.
    pub fn validate(&self, dom: &dyn DomView, filter: &ValidationFilter) -> Vec<Finding> {
        let ctx = RuleContext {
            dom,
            handlers: &self.handlers,
        };
        let mut findings = Vec::new();

        for category in Category::ALL {
            for group in self.config.groups(category) {
                if !filter.admits(category, &group.rule_type) {
                    continue;
                }
                let Some(kind) = self.kinds.get(&group.rule_type) else {
                    tracing::warn!(rule_type = %group.rule_type, %category, "unknown rule type, group skipped");
                    continue;
                };
                for rule in &group.rules {
                    self.validate_by_selector(&ctx, kind.as_ref(), rule, &mut findings);
                }
            }
        }

        tracing::debug!(findings = findings.len(), "validation finished");
        findings
    }

    /// Check one rule against every element its selector matches, or once
    /// against the document when it has no selector
    fn validate_by_selector(
        &self,
        ctx: &RuleContext<'_>,
        kind: &dyn RuleType,
        rule: &Rule,
        out: &mut Vec<Finding>,
    ) {
        let Some(selector) = rule.selector.as_deref() else {
            let verdict = kind.check(ctx, rule, None);
            if let Some(finding) = self.finding(ctx, rule, None, verdict) {
                out.push(finding);
            }
            return;
        };

        let selectors = match SelectorList::parse(selector) {
            Ok(selectors) => selectors,
            Err(err) => {
                tracing::warn!(selector, %err, "invalid rule selector, rule skipped");
                return;
            }
        };
        for element in query_selector_all(ctx.dom, &selectors) {
            let verdict = kind.check(ctx, rule, Some(element));
            if let Some(finding) = self.finding(ctx, rule, Some(element), verdict) {
                out.push(finding);
            }
        }
    }

    fn finding(
        &self,
        ctx: &RuleContext<'_>,
        rule: &Rule,
        element: Option<NodeId>,
        verdict: Verdict,
    ) -> Option<Finding> {
        let message = match verdict {
            Verdict::Pass | Verdict::Skip => return None,
            Verdict::FailWith(message) => message,
            Verdict::Fail(placeholders) => {
                let tag = element.and_then(|el| ctx.dom.tag_name(el));
                render_message(&rule.message, tag, &placeholders)
            }
        };
        let element_id = element
            .and_then(|el| self.stamp.read(ctx.dom, el))
            .map(str::to_string);
        let details = serde_json::to_value(&rule.details).unwrap_or_default();
        Some(Finding::error(element_id, message, details))
    }
}

/// Expand `{tag}` and rule-specific placeholders
fn render_message(template: &str, tag: Option<&str>, placeholders: &[(&'static str, String)]) -> String {
    let mut message = template.to_string();
    if let Some(tag) = tag {
        message = message.replace("{tag}", tag);
    }
    for (name, value) in placeholders {
        message = message.replace(&format!("{{{name}}}"), value);
    }
    message
}
