//! Rule configuration
//!
//! Pure data: every check is described by a selector, a message template
//! and a few typed parameters. What a group's rules mean is decided by its
//! `type`, looked up in the [`RuleTypeRegistry`](crate::RuleTypeRegistry).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::RuleConfigError;

/// Rule category, in validation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Element,
    Structure,
    Accessibility,
    Metadata,
}

impl Category {
    /// Fixed iteration order of `validate()`
    pub const ALL: [Category; 4] = [
        Category::Element,
        Category::Structure,
        Category::Accessibility,
        Category::Metadata,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Element => "element",
            Category::Structure => "structure",
            Category::Accessibility => "accessibility",
            Category::Metadata => "metadata",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = RuleConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RuleConfigError::UnknownCategory(s.to_string()))
    }
}

/// Rule groups per category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    pub element: Vec<RuleGroup>,
    pub structure: Vec<RuleGroup>,
    pub accessibility: Vec<RuleGroup>,
    pub metadata: Vec<RuleGroup>,
}

impl RuleConfig {
    /// Parse a JSON rule file
    pub fn from_json(json: &str) -> Result<Self, RuleConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn groups(&self, category: Category) -> &[RuleGroup] {
        match category {
            Category::Element => &self.element,
            Category::Structure => &self.structure,
            Category::Accessibility => &self.accessibility,
            Category::Metadata => &self.metadata,
        }
    }

    pub fn groups_mut(&mut self, category: Category) -> &mut Vec<RuleGroup> {
        match category {
            Category::Element => &mut self.element,
            Category::Structure => &mut self.structure,
            Category::Accessibility => &mut self.accessibility,
            Category::Metadata => &mut self.metadata,
        }
    }

    /// Total number of rules across all groups
    pub fn rule_count(&self) -> usize {
        Category::ALL
            .iter()
            .flat_map(|&c| self.groups(c))
            .map(|g| g.rules.len())
            .sum()
    }
}

/// Rules sharing one interpretation strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleGroup {
    #[serde(rename = "type")]
    pub rule_type: String,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl RuleGroup {
    pub fn new(rule_type: &str, rules: Vec<Rule>) -> Self {
        Self {
            rule_type: rule_type.to_string(),
            rules,
        }
    }
}

/// One check
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    /// Elements the rule applies to; document-level rules have none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    /// Message template. `{tag}` expands to the element's tag name, rule
    /// kinds may fill further placeholders.
    pub message: String,
    #[serde(default)]
    pub details: Details,
    /// Handler for handler-backed rule kinds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handler_id: Option<String>,
    /// Attribute values must contain more than whitespace
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub non_blank: bool,
    /// Content-presence rules accept empty content
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub allow_empty: bool,
}

impl Rule {
    pub fn new(selector: &str, message: &str) -> Self {
        Self {
            selector: Some(selector.to_string()),
            message: message.to_string(),
            ..Self::default()
        }
    }

    /// Rule checked once per document
    pub fn document(message: &str) -> Self {
        Self {
            message: message.to_string(),
            ..Self::default()
        }
    }

    pub fn with_details(mut self, details: Details) -> Self {
        self.details = details;
        self
    }

    pub fn with_handler(mut self, handler_id: &str) -> Self {
        self.handler_id = Some(handler_id.to_string());
        self
    }

    pub fn non_blank(mut self) -> Self {
        self.non_blank = true;
        self
    }
}

/// Typed rule parameters, reported verbatim as finding details
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Details {
    /// All must be present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_attributes: Option<Vec<String>>,
    /// Any one of these satisfies the rule on its own
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_attributes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_parents: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_first_child: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_children: Option<Vec<String>>,
    /// Non-empty attributes accepted in place of content or children
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_attributes: Option<Vec<String>>,
    /// ID-reference attributes to resolve
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_attributes: Option<Vec<String>>,
}

/// Shorthand for building string lists
pub(crate) fn list(items: &[&str]) -> Option<Vec<String>> {
    Some(items.iter().map(|s| s.to_string()).collect())
}

impl Details {
    pub fn required_attributes(items: &[&str]) -> Self {
        Self {
            required_attributes: list(items),
            ..Self::default()
        }
    }

    pub fn valid_parents(items: &[&str]) -> Self {
        Self {
            valid_parents: list(items),
            ..Self::default()
        }
    }

    pub fn required_first_child(items: &[&str]) -> Self {
        Self {
            required_first_child: list(items),
            ..Self::default()
        }
    }

    pub fn required_children(items: &[&str]) -> Self {
        Self {
            required_children: list(items),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!("Structure".parse::<Category>().unwrap(), Category::Structure);
        assert!("layout".parse::<Category>().is_err());
    }

    #[test]
    fn test_rule_config_from_json() {
        let json = r#"{
            "element": [{
                "type": "attributePresence",
                "rules": [{
                    "selector": "video",
                    "message": "Video elements must have controls",
                    "details": { "requiredAttributes": ["controls"] }
                }]
            }],
            "metadata": [{
                "type": "documentProperties",
                "rules": [{ "message": "Title", "handlerId": "title" }]
            }]
        }"#;
        let config = RuleConfig::from_json(json).unwrap();

        assert_eq!(config.rule_count(), 2);
        assert!(config.structure.is_empty());
        let rule = &config.element[0].rules[0];
        assert_eq!(rule.selector.as_deref(), Some("video"));
        assert_eq!(
            rule.details.required_attributes,
            Some(vec!["controls".to_string()])
        );
        assert_eq!(config.metadata[0].rules[0].handler_id.as_deref(), Some("title"));
        assert_eq!(config.metadata[0].rules[0].selector, None);
    }

    #[test]
    fn test_details_serialise_only_present_fields() {
        let details = Details::valid_parents(&["dl"]);
        let json = serde_json::to_string(&details).unwrap();
        assert_eq!(json, r#"{"validParents":["dl"]}"#);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(RuleConfig::from_json("{ \"element\": 3 }").is_err());
    }
}
