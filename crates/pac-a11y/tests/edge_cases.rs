//! Edge case tests for pac-a11y
//!
//! Configuration errors degrade to skipped rules; the registries are open.

use pac_a11y::{
    Category, HandlerRegistry, Rule, RuleConfig, RuleContext, RuleGroup, RuleHandler, RuleType,
    ValidationFilter, Validator, Verdict,
};
use pac_dom::{Document, DomView, NodeId, StampAttribute};
use pac_html::parse;
use pac_tree::TreeBuilder;

fn single(category: Category, group: RuleGroup) -> RuleConfig {
    let mut config = RuleConfig::default();
    config.groups_mut(category).push(group);
    config
}

#[test]
fn test_missing_handler_is_a_no_op() {
    let config = single(
        Category::Metadata,
        RuleGroup::new("documentProperties", vec![Rule::document("Needs a favicon").with_handler("favicon")]),
    );
    let doc = parse("<p>x</p>").unwrap();
    assert!(Validator::new(config).validate(&doc, &ValidationFilter::all()).is_empty());
}

#[test]
fn test_unknown_rule_type_is_skipped() {
    let mut config = single(
        Category::Element,
        RuleGroup::new("spellCheck", vec![Rule::new("p", "Spelling")]),
    );
    config.element.push(RuleGroup::new(
        "contentPresence",
        vec![Rule::new("p", "Paragraphs must have content")],
    ));
    let doc = parse("<p></p>").unwrap();
    let findings = Validator::new(config).validate(&doc, &ValidationFilter::all());
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].message, "Paragraphs must have content");
}

#[test]
fn test_invalid_selector_is_skipped() {
    let config = single(
        Category::Element,
        RuleGroup::new(
            "contentPresence",
            vec![Rule::new("p[", "broken"), Rule::new("p", "Paragraphs must have content")],
        ),
    );
    let doc = parse("<p></p>").unwrap();
    let findings = Validator::new(config).validate(&doc, &ValidationFilter::all());
    assert_eq!(findings.len(), 1);
}

#[test]
fn test_zero_matches_zero_findings() {
    let doc = parse("<p>only text</p>").unwrap();
    let findings = Validator::new(RuleConfig::standard())
        .validate(&doc, &ValidationFilter::category(Category::Structure));
    assert!(findings.is_empty());
}

#[test]
fn test_document_findings_have_no_element_id() {
    let doc = parse("<p>x</p>").unwrap();
    let findings = Validator::new(RuleConfig::standard())
        .validate(&doc, &ValidationFilter::category(Category::Metadata));
    let messages: Vec<_> = findings.iter().map(|f| f.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "Document must have a non-empty title",
            "Document must have a valid language code",
            "Viewport meta tag should be present with width and initial-scale properties",
            "Meta description is required",
            "Character encoding declaration is required",
        ]
    );
    assert!(findings.iter().all(|f| f.element_id.is_none()));
}

#[test]
fn test_description_length_message() {
    let doc = parse(r#"<head><meta name="description" content="Short"></head>"#).unwrap();
    let findings = Validator::new(RuleConfig::standard())
        .validate(&doc, &ValidationFilter::rule_type("metaTags"));
    assert!(findings
        .iter()
        .any(|f| f.message == "Meta description must be between 50-160 characters (currently 5)"));
}

#[test]
fn test_unstamped_elements_report_no_id() {
    let doc = parse(r#"<img src="x.jpg">"#).unwrap();
    let findings = Validator::new(RuleConfig::standard())
        .validate(&doc, &ValidationFilter::rule_type("attributePresence"));
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].element_id, None);
}

#[test]
fn test_custom_stamp_attribute() {
    let stamp = StampAttribute::for_instance("panel");
    let mut doc = parse(r#"<img src="x.jpg">"#).unwrap();
    let tree = TreeBuilder::new().with_stamp(stamp.clone()).scan_document(&mut doc);

    let findings = Validator::new(RuleConfig::standard())
        .with_stamp(stamp)
        .validate(&doc, &ValidationFilter::rule_type("attributePresence"));
    let img_id = &tree[0].children[1].children[0].id;
    assert_eq!(findings[0].element_id.as_ref(), Some(img_id));
}

/// Fails every element whose text mentions "lorem"
struct NoPlaceholderText;

impl RuleHandler for NoPlaceholderText {
    fn validate(&self, dom: &dyn DomView, element: Option<NodeId>) -> bool {
        element.is_none_or(|el| !dom.text_content(el).to_lowercase().contains("lorem"))
    }
}

#[test]
fn test_custom_handler() {
    let config = single(
        Category::Accessibility,
        RuleGroup::new(
            "ariaAttributes",
            vec![Rule::new("p", "Placeholder text left in <{tag}>").with_handler("placeholder")],
        ),
    );
    let mut handlers = HandlerRegistry::standard();
    handlers.register("placeholder", NoPlaceholderText);

    let doc = parse("<p>Lorem ipsum</p><p>Real text</p>").unwrap();
    let findings = Validator::new(config)
        .with_handlers(handlers)
        .validate(&doc, &ValidationFilter::all());
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].message, "Placeholder text left in <p>");
}

/// Elements must not be nested deeper than `max` elements
struct MaxDepth(usize);

impl RuleType for MaxDepth {
    fn check(&self, ctx: &RuleContext<'_>, _rule: &Rule, element: Option<NodeId>) -> Verdict {
        let Some(mut current) = element else { return Verdict::Skip };
        let mut depth = 0;
        while let Some(parent) = ctx.dom.parent(current) {
            depth += 1;
            current = parent;
        }
        Verdict::from_check(depth <= self.0)
    }
}

#[test]
fn test_custom_rule_kind() {
    let config = single(
        Category::Structure,
        RuleGroup::new("maxDepth", vec![Rule::new("span", "Too deep")]),
    );
    let mut validator = Validator::new(config);
    // the nested span has the document, html, body and div above it
    validator.kinds_mut().register("maxDepth", MaxDepth(3));

    let doc: Document = parse("<span>ok</span><div><span>deep</span></div>").unwrap();
    let findings = validator.validate(&doc, &ValidationFilter::all());
    assert_eq!(findings.len(), 1);
}
