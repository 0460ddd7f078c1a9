//! Built-in sample rule set

use crate::config::list;
use crate::{Details, Rule, RuleConfig, RuleGroup};

const INPUT_NEEDS_LABEL: &str = r#"input:not([type="hidden"]):not([type="submit"]):not([type="button"]):not([type="reset"]):not([type="image"])"#;

impl RuleConfig {
    /// The standard sample rules
    pub fn standard() -> Self {
        Self {
            element: element_rules(),
            structure: structure_rules(),
            accessibility: accessibility_rules(),
            metadata: metadata_rules(),
        }
    }
}

fn element_rules() -> Vec<RuleGroup> {
    vec![
        RuleGroup::new(
            "attributePresence",
            vec![
                Rule::new("img, area, iframe", "Elements that represent content must have alt text")
                    .with_details(Details::required_attributes(&["alt"])),
                Rule::new("a, area, link", "Links must have non-empty href attribute")
                    .with_details(Details::required_attributes(&["href"]))
                    .non_blank(),
                Rule::new(
                    r#"input:not([type="hidden"]), button, meter, output, progress, select, textarea"#,
                    "Interactive elements need an ID for label association",
                )
                .with_details(Details::required_attributes(&["id"])),
                Rule::new("video, audio", "Media elements should have playback controls").with_details(
                    Details {
                        required_attributes: list(&["controls"]),
                        alternative_attributes: list(&["controlslist"]),
                        ..Details::default()
                    },
                ),
                Rule::new(
                    "source[src], img[src], iframe[src], video[src], audio[src], track[src]",
                    "Elements with sources must have non-empty src attribute",
                )
                .with_details(Details::required_attributes(&["src"]))
                .non_blank(),
            ],
        ),
        RuleGroup::new(
            "contentPresence",
            vec![
                Rule::new(
                    "button, summary, figcaption, label, legend, caption",
                    "Interactive and descriptive elements must have text content",
                ),
                Rule::new("h1, h2, h3, h4, h5, h6", "Headings must have content"),
                Rule::new("th", "Table headers must have content or aria-label").with_details(Details {
                    fallback_attributes: list(&["aria-label"]),
                    ..Details::default()
                }),
            ],
        ),
    ]
}

fn structure_rules() -> Vec<RuleGroup> {
    vec![
        RuleGroup::new(
            "parentChild",
            vec![
                Rule::new("dt, dd", "<{tag}> must be inside a <dl> element")
                    .with_details(Details::valid_parents(&["dl"])),
                Rule::new("li", "<li> must be inside a <ul>, <ol>, or <menu> element")
                    .with_details(Details::valid_parents(&["ul", "ol", "menu"])),
                Rule::new("tr", "<tr> must be inside a <table>, <thead>, <tbody>, or <tfoot> element")
                    .with_details(Details::valid_parents(&["table", "thead", "tbody", "tfoot"])),
                Rule::new("td, th", "<{tag}> must be inside a <tr> element")
                    .with_details(Details::valid_parents(&["tr"])),
            ],
        ),
        RuleGroup::new(
            "childSequence",
            vec![
                Rule::new("table", "Tables should start with caption, thead, tbody, or tr")
                    .with_details(Details::required_first_child(&["caption", "thead", "tbody", "tr"])),
                Rule::new("select", "Select elements must contain options")
                    .with_details(Details::required_children(&["option", "optgroup"])),
                Rule::new("video, audio", "Media elements must have a source").with_details(Details {
                    required_children: list(&["source"]),
                    fallback_attributes: list(&["src"]),
                    ..Details::default()
                }),
                Rule::new("picture", "Picture elements must contain an img element")
                    .with_details(Details::required_children(&["img"])),
            ],
        ),
    ]
}

fn accessibility_rules() -> Vec<RuleGroup> {
    vec![
        RuleGroup::new(
            "ariaReference",
            vec![Rule::new(
                "[aria-labelledby], [aria-describedby], [aria-controls], [aria-owns], [aria-activedescendant]",
                "{attribute} must reference existing ID(s)",
            )
            .with_details(Details {
                reference_attributes: list(crate::ARIA_REFERENCE_ATTRIBUTES),
                ..Details::default()
            })],
        ),
        RuleGroup::new(
            "ariaAttributes",
            vec![
                Rule::new("[role]", "Elements with role attribute must use valid ARIA role values")
                    .with_handler("ariaRole"),
            ],
        ),
        RuleGroup::new(
            "labelAssociation",
            vec![
                Rule::new(INPUT_NEEDS_LABEL, "Input elements must have associated labels")
                    .with_handler("labelable"),
                Rule::new(
                    "select, textarea, meter, output, progress",
                    "Form controls must have associated labels",
                )
                .with_handler("labelable"),
            ],
        ),
    ]
}

fn metadata_rules() -> Vec<RuleGroup> {
    vec![
        RuleGroup::new(
            "documentProperties",
            vec![
                Rule::document("Document must have a non-empty title").with_handler("title"),
                Rule::document("Document must have a valid language code").with_handler("lang"),
            ],
        ),
        RuleGroup::new(
            "metaTags",
            vec![
                Rule::document("Viewport meta tag should be present with width and initial-scale properties")
                    .with_handler("viewport"),
                Rule::document("Meta description is required").with_handler("description"),
                Rule::document("Character encoding declaration is required").with_handler("charset"),
            ],
        ),
    ]
}
