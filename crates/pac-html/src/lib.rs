//! pac HTML Parser
//!
//! HTML5 parsing built on html5ever. The parsed tree is copied into a
//! [`pac_dom::Document`] so the rest of the scanner only ever sees the
//! arena DOM.

mod parser;

pub use pac_dom::{Document, NodeId};
pub use parser::HtmlParser;

/// Parse an HTML string into a Document
pub fn parse(html: &str) -> Result<Document, ParseError> {
    HtmlParser::new().parse(html)
}

/// Parse error
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to read HTML input: {0}")]
    Io(#[from] std::io::Error),
}
