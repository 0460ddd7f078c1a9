//! pac Accessibility Validator
//!
//! Interprets a declarative rule configuration against a document and
//! reports findings keyed by the stamped element ids.
//!
//! Features:
//! - Data-only rule configuration (JSON)
//! - Rule kinds dispatched through a registry keyed by group `type`
//! - Named handlers for checks that need more than a selector
//! - ARIA role table

pub mod aria;
pub mod config;
pub mod handlers;
pub mod kinds;
mod standard;
mod validator;

pub use aria::{ARIA_REFERENCE_ATTRIBUTES, AriaRole};
pub use config::{Category, Details, Rule, RuleConfig, RuleGroup};
pub use handlers::{HandlerRegistry, RuleHandler};
pub use kinds::{RuleContext, RuleType, RuleTypeRegistry, Verdict};
pub use validator::{ValidationFilter, Validator};

pub use pac_tree::{Finding, Severity};

/// Rule configuration error
#[derive(Debug, thiserror::Error)]
pub enum RuleConfigError {
    #[error("Invalid rule configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown rule category: {0}")]
    UnknownCategory(String),
}
