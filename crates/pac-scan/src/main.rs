//! pac-scan - command line scanner

mod cli;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use pac_engine::{Config, ScanReport, Scanner, ValidationFilter, init_tracing, is_web_page};
use tracing::{info, warn};

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(rules) = &cli.rules {
        config.rules = Some(rules.clone());
    }

    init_tracing(&config.log_filter);
    info!("pac-scan v{}", pac_engine::VERSION);

    let report = match cli.url.as_deref() {
        Some(url) if !is_web_page(url) => {
            warn!(url, "Not a web page, skipping scan");
            ScanReport::default()
        }
        _ => scan(&cli, &config)?,
    };

    let output = ScanReport {
        tree: cli.view.apply(report.tree),
        document_findings: report.document_findings,
    };
    let json = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{json}");
    Ok(())
}

fn scan(cli: &Cli, config: &Config) -> Result<ScanReport> {
    let html = read_input(&cli.input)?;
    let url = cli.url.as_deref().unwrap_or("about:blank");
    let mut document = pac_html::HtmlParser::new()
        .parse_with_url(&html, url)
        .context("Failed to parse HTML")?;

    let mut scanner = Scanner::from_config(config)?;
    let filter = ValidationFilter {
        category: cli.category,
        rule_type: cli.rule_type.clone(),
    };
    Ok(scanner.scan(&mut document, &filter))
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut html = String::new();
        std::io::stdin()
            .read_to_string(&mut html)
            .context("Failed to read stdin")?;
        return Ok(html);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
