//! Stamped identity attribute
//!
//! Every element that makes it into a scan tree carries its tree id in a
//! single `data-*` attribute. The attribute name embeds an instance name so
//! it stays clear of author markup.

use crate::{DomView, DomViewMut, NodeId};

/// Instance name used when none is configured
pub const DEFAULT_INSTANCE: &str = "pac";

/// Name of the attribute holding a node's tree id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StampAttribute(String);

impl StampAttribute {
    /// `data-<instance>`, with the instance lower-cased and anything outside
    /// `[a-z0-9-]` replaced by `-`
    pub fn for_instance(instance: &str) -> Self {
        let cleaned: String = instance
            .trim()
            .chars()
            .map(|c| c.to_ascii_lowercase())
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '-' })
            .collect();
        let cleaned = if cleaned.is_empty() { DEFAULT_INSTANCE.to_string() } else { cleaned };
        Self(format!("data-{cleaned}"))
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Read the stamped id of an element
    pub fn read<'a, D: DomView + ?Sized>(&self, dom: &'a D, node: NodeId) -> Option<&'a str> {
        dom.get_attribute(node, &self.0)
    }

    /// Element carrying `id`, as `[data-pac="id"]` would find it
    pub fn find<D: DomView + ?Sized>(&self, dom: &D, id: &str) -> Option<NodeId> {
        dom.elements()
            .into_iter()
            .find(|&el| self.read(dom, el) == Some(id))
    }

    /// Stamp an element, overwriting any id from an earlier scan
    pub fn write<D: DomViewMut + ?Sized>(&self, dom: &mut D, node: NodeId, id: &str) -> bool {
        dom.set_attribute(node, &self.0, id)
    }
}

impl Default for StampAttribute {
    fn default() -> Self {
        Self::for_instance(DEFAULT_INSTANCE)
    }
}

impl std::fmt::Display for StampAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
