//! Command line definitions

use std::path::PathBuf;

use clap::Parser;
use pac_engine::{Category, View};

/// Scan an HTML document and print its structure tree as JSON
#[derive(Debug, Parser)]
#[command(name = "pac-scan")]
#[command(version)]
pub(crate) struct Cli {
    /// HTML file to scan, `-` for stdin
    pub input: PathBuf,

    /// Configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// JSON rule file, overrides the configuration
    #[arg(short, long)]
    pub rules: Option<PathBuf>,

    /// Only run rules of this category
    #[arg(long)]
    pub category: Option<Category>,

    /// Only run rule groups of this type (e.g. attributePresence)
    #[arg(long)]
    pub rule_type: Option<String>,

    /// Tree view: schema, landmarks or headers
    #[arg(long, default_value = "schema")]
    pub view: View,

    /// Document URL; non-http(s) documents are not scanned
    #[arg(long)]
    pub url: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}
