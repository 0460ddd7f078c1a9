//! pac Engine
//!
//! Ties the tree builder and the rule validator together: one scan stamps
//! the document, validates it and joins the findings back onto the tree.
//!
//! # Example
//! ```rust,ignore
//! use pac_engine::{Config, Scanner, View};
//!
//! let config = Config::load("pac.toml".as_ref())?;
//! let mut scanner = Scanner::from_config(&config)?;
//! let report = scanner.scan(&mut document, &ValidationFilter::all());
//! let landmarks = View::Landmarks.apply(report.tree);
//! ```

mod config;
mod merge;
mod scanner;
mod telemetry;
mod views;

pub use config::{Config, ConfigError};
pub use merge::merge_findings;
pub use scanner::{ScanReport, Scanner};
pub use telemetry::init_tracing;
pub use views::{View, ViewParseError};

pub use pac_a11y::{Category, RuleConfig, ValidationFilter};
pub use pac_tree::{Finding, Severity, TreeNode};

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Only http(s) documents are scanned
pub fn is_web_page(url: &str) -> bool {
    url.starts_with("http:") || url.starts_with("https:")
}
