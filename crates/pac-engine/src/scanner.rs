//! Scanner - one pass of build, validate, merge

use pac_a11y::{RuleConfig, ValidationFilter, Validator};
use pac_dom::{DomViewMut, StampAttribute};
use pac_tree::{Finding, IdGenerator, TreeBuilder, TreeNode};
use serde::{Deserialize, Serialize};

use crate::config::{Config, ConfigError};
use crate::merge::merge_findings;

/// Result of one scan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    /// Captured forest with findings attached
    pub tree: Vec<TreeNode>,
    /// Findings that belong to no captured node
    pub document_findings: Vec<Finding>,
}

impl ScanReport {
    /// Every finding, attached or not
    pub fn finding_count(&self) -> usize {
        let mut count = self.document_findings.len();
        for root in &self.tree {
            root.walk(&mut |n| count += n.validation.len());
        }
        count
    }

    pub fn node_count(&self) -> usize {
        self.tree.iter().map(TreeNode::len).sum()
    }
}

/// Tree builder and validator sharing one stamp attribute
pub struct Scanner {
    builder: TreeBuilder,
    validator: Validator,
}

impl Scanner {
    /// Scanner with timestamp ids and the default stamp attribute
    pub fn new(rules: RuleConfig) -> Self {
        Self::with_parts(TreeBuilder::new(), Validator::new(rules), StampAttribute::default())
    }

    /// Scanner for a loaded configuration
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let rules = config.rule_config()?;
        Ok(Self::with_parts(
            TreeBuilder::new(),
            Validator::new(rules),
            config.stamp(),
        ))
    }

    /// Assemble from custom parts; both sides are pointed at `stamp`
    pub fn with_parts(builder: TreeBuilder, validator: Validator, stamp: StampAttribute) -> Self {
        Self {
            builder: builder.with_stamp(stamp.clone()),
            validator: validator.with_stamp(stamp),
        }
    }

    /// Swap the id generator, keeping the stamp attribute
    pub fn with_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        let stamp = self.builder.stamp().clone();
        self.builder = TreeBuilder::with_generator(ids).with_stamp(stamp);
        self
    }

    pub fn stamp(&self) -> &StampAttribute {
        self.builder.stamp()
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    pub fn validator_mut(&mut self) -> &mut Validator {
        &mut self.validator
    }

    /// Stamp and snapshot `dom`, validate it, and join the findings
    pub fn scan<D: DomViewMut>(&mut self, dom: &mut D, filter: &ValidationFilter) -> ScanReport {
        let mut tree = self.builder.scan_document(dom);
        let findings = self.validator.validate(&*dom, filter);
        let total = findings.len();
        let document_findings = merge_findings(&mut tree, findings);
        tracing::info!(
            nodes = tree.iter().map(TreeNode::len).sum::<usize>(),
            findings = total,
            unattached = document_findings.len(),
            "scan complete"
        );
        ScanReport { tree, document_findings }
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(RuleConfig::standard())
    }
}
