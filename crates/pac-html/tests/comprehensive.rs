//! Comprehensive tests for pac-html
//!
//! Tests that parsed documents expose the structure the scanner relies on.

use pac_dom::{DomView, NodeType};
use pac_html::{HtmlParser, parse};

#[test]
fn test_parse_minimal_html() {
    let doc = parse("").unwrap();
    // html5ever always synthesises html/head/body
    assert!(doc.document_element().is_some());
    assert!(doc.head().is_some());
    assert!(doc.body().is_some());
}

#[test]
fn test_parse_nested_structure() {
    let html = r#"
        <html lang="en">
            <head>
                <title>Test Page</title>
                <meta charset="utf-8">
            </head>
            <body>
                <div id="container">
                    <h1>Welcome</h1>
                    <p class="intro">This is a test.</p>
                    <ul>
                        <li>Item 1</li>
                        <li>Item 2</li>
                    </ul>
                </div>
            </body>
        </html>
    "#;

    let doc = HtmlParser::new().parse(html).unwrap();
    let html_el = doc.document_element().unwrap();
    assert_eq!(doc.get_attribute(html_el, "lang"), Some("en"));
    assert_eq!(doc.title(), "Test Page");

    let container = doc.element_by_id("container").unwrap();
    let tags: Vec<_> = doc
        .element_children(container)
        .into_iter()
        .filter_map(|c| doc.tag_name(c))
        .collect();
    assert_eq!(tags, vec!["h1", "p", "ul"]);
}

#[test]
fn test_attributes_keep_source_order() {
    let doc = parse(r#"<img SRC="a.png" alt="" data-x="1">"#).unwrap();
    let img = doc
        .elements()
        .into_iter()
        .find(|&e| doc.tag_name(e) == Some("img"))
        .unwrap();

    assert_eq!(doc.attributes(img), vec![("src", "a.png"), ("alt", ""), ("data-x", "1")]);
}

#[test]
fn test_whitespace_text_nodes_are_kept() {
    let doc = parse("<ul>\n  <li>A</li>\n</ul>").unwrap();
    let ul = doc
        .elements()
        .into_iter()
        .find(|&e| doc.tag_name(e) == Some("ul"))
        .unwrap();

    let kinds: Vec<_> = doc.children(ul).into_iter().filter_map(|c| doc.node_type(c)).collect();
    assert_eq!(kinds, vec![NodeType::Text, NodeType::Element, NodeType::Text]);
}

#[test]
fn test_parse_script_and_style() {
    let html = r#"
        <html>
            <head>
                <style>body { background: red; }</style>
                <script>function foo() { return "<div>not parsed</div>"; }</script>
            </head>
            <body><p>Content</p></body>
        </html>
    "#;

    let doc = parse(html).unwrap();
    let divs = doc
        .elements()
        .into_iter()
        .filter(|&e| doc.tag_name(e) == Some("div"))
        .count();
    assert_eq!(divs, 0);

    let body = doc.body().unwrap();
    assert_eq!(doc.rendered_text(body).as_deref(), Some("Content"));
}

#[test]
fn test_parse_entities() {
    let doc = parse("<p>&lt;tag&gt; &amp; &quot;quotes&quot;</p>").unwrap();
    let body = doc.body().unwrap();
    assert_eq!(doc.text_content(body), "<tag> & \"quotes\"");
}

#[test]
fn test_parse_comments() {
    let doc = parse("<div><!-- note --><p>Content</p></div>").unwrap();
    let div = doc
        .elements()
        .into_iter()
        .find(|&e| doc.tag_name(e) == Some("div"))
        .unwrap();
    let first = doc.children(div)[0];
    assert_eq!(doc.node_type(first), Some(NodeType::Comment));
    // comments never contribute text
    assert_eq!(doc.text_content(div), "Content");
}

#[test]
fn test_doctype_is_a_root() {
    let doc = parse("<!DOCTYPE html><html><body></body></html>").unwrap();
    let roots = doc.roots();
    assert_eq!(doc.node_type(roots[0]), Some(NodeType::DocumentType));
    assert_eq!(doc.document_element(), Some(roots[1]));
}

#[test]
fn test_parse_with_url() {
    let doc = HtmlParser::new()
        .parse_with_url("<p>x</p>", "https://example.com/")
        .unwrap();
    assert_eq!(doc.url(), "https://example.com/");
}

#[test]
fn test_parse_large_document() {
    let mut html = String::from("<html><body>");
    for i in 0..1000 {
        html.push_str(&format!("<div class=\"item-{i}\"><p>Paragraph {i}</p></div>"));
    }
    html.push_str("</body></html>");

    let doc = parse(&html).unwrap();
    let body = doc.body().unwrap();
    assert_eq!(doc.element_children(body).len(), 1000);
}
