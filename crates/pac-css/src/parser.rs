//! Selector parser using lightningcss
//!
//! The selector text is parsed as the prelude of an empty style rule and
//! the resulting component sequences are converted into our selector
//! model. Anything the matcher cannot evaluate is rejected here.

use std::fmt;

use lightningcss::rules::CssRule;
use lightningcss::selector::{Component, Selector};
use lightningcss::stylesheet::{ParserOptions, StyleSheet};
use parcel_selectors::attr::AttrSelectorOperator;
use parcel_selectors::parser::NthType;

use crate::selectors::{
    AttributeMatcher, AttributeSelector, Combinator, ComplexSelector, CompoundSelector,
    PseudoClass, SelectorComponent, SelectorList,
};
use crate::SelectorError;

/// Parse a comma-separated selector list
pub fn parse_selector_list(input: &str) -> Result<SelectorList, SelectorError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(SelectorError::Empty);
    }
    if input.contains(['{', '}']) {
        return Err(SelectorError::Syntax(format!("block delimiter in selector `{input}`")));
    }

    let css = format!("{input} {{}}");
    let stylesheet = StyleSheet::parse(&css, ParserOptions::default()).map_err(|e| {
        tracing::debug!(selector = input, error = %e, "selector rejected by css parser");
        SelectorError::Syntax(e.to_string())
    })?;

    let style_rule = match stylesheet.rules.0.as_slice() {
        [CssRule::Style(style_rule)] => style_rule,
        _ => return Err(SelectorError::Syntax(format!("`{input}` is not a single selector list"))),
    };

    let selectors = style_rule
        .selectors
        .0
        .iter()
        .map(convert_selector)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SelectorList { selectors })
}

/// Convert one complex selector. lightningcss yields compounds right to
/// left; ours are stored left to right.
fn convert_selector(selector: &Selector<'_>) -> Result<ComplexSelector, SelectorError> {
    let mut compounds = Vec::new();
    let mut combinators = Vec::new();
    let mut iter = selector.iter();
    loop {
        let mut compound = CompoundSelector::default();
        for component in &mut iter {
            if let Some(converted) = convert_component(component)? {
                compound.components.push(converted);
            }
        }
        compounds.push(compound);

        let Some(combinator) = iter.next_sequence() else { break };
        combinators.push(match variant(&combinator).as_str() {
            "Descendant" => Combinator::Descendant,
            "Child" => Combinator::Child,
            other => return Err(SelectorError::Unsupported(format!("{other} combinator"))),
        });
    }
    compounds.reverse();
    combinators.reverse();
    Ok(ComplexSelector { compounds, combinators })
}

fn convert_component(component: &Component<'_>) -> Result<Option<SelectorComponent>, SelectorError> {
    let converted = match component {
        // `*|` and the like only constrain namespaces, which HTML elements share
        Component::ExplicitAnyNamespace => return Ok(None),
        Component::ExplicitUniversalType => SelectorComponent::Universal,
        Component::LocalName(name) => SelectorComponent::Type(owned(&name.lower_name)),
        Component::ID(id) => SelectorComponent::Id(owned(id)),
        Component::Class(class) => SelectorComponent::Class(owned(class)),
        Component::AttributeInNoNamespaceExists { local_name, .. } => {
            SelectorComponent::Attribute(AttributeSelector {
                name: owned(local_name).to_ascii_lowercase(),
                matcher: None,
                case_insensitive: false,
            })
        }
        Component::AttributeInNoNamespace {
            local_name,
            operator,
            value,
            case_sensitivity,
            ..
        } => {
            let value = owned(value);
            let matcher = match attr_operator_name(operator) {
                "Equal" => AttributeMatcher::Exact(value),
                "Includes" => AttributeMatcher::Contains(value),
                "DashMatch" => AttributeMatcher::DashMatch(value),
                "Prefix" => AttributeMatcher::Prefix(value),
                "Suffix" => AttributeMatcher::Suffix(value),
                "Substring" => AttributeMatcher::Substring(value),
                other => {
                    return Err(SelectorError::Unsupported(format!("attribute operator {other}")));
                }
            };
            SelectorComponent::Attribute(AttributeSelector {
                name: owned(local_name),
                matcher: Some(matcher),
                // only an explicit ` i` flag folds case
                case_insensitive: variant(case_sensitivity) == "AsciiCaseInsensitive",
            })
        }
        Component::Root => SelectorComponent::PseudoClass(PseudoClass::Root),
        Component::Empty => SelectorComponent::PseudoClass(PseudoClass::Empty),
        Component::Nth(nth) if !nth.is_function => {
            let pseudo = match nth_type_name(&nth.ty) {
                "Child" => PseudoClass::FirstChild,
                "LastChild" => PseudoClass::LastChild,
                "OnlyChild" => PseudoClass::OnlyChild,
                _ => return Err(unsupported_pseudo(component)),
            };
            SelectorComponent::PseudoClass(pseudo)
        }
        Component::Negation(selectors) => {
            let inner = selectors
                .iter()
                .map(|selector| {
                    let mut complex = convert_selector(selector)?;
                    match complex.compounds.len() {
                        1 => Ok(complex.compounds.remove(0)),
                        _ => Err(SelectorError::Unsupported(format!(
                            "complex selector inside :not(): {selector:?}"
                        ))),
                    }
                })
                .collect::<Result<Vec<_>, _>>()?;
            SelectorComponent::PseudoClass(PseudoClass::Not(inner))
        }
        Component::Nth(_) | Component::NthOf(_) | Component::NonTSPseudoClass(_) => {
            return Err(unsupported_pseudo(component));
        }
        other => return Err(SelectorError::Unsupported(format!("{other:?}"))),
    };
    Ok(Some(converted))
}

fn unsupported_pseudo(component: &Component<'_>) -> SelectorError {
    let text = format!("{component:?}");
    SelectorError::UnsupportedPseudoClass(text.trim_start_matches(':').to_string())
}

fn owned(value: &str) -> String {
    value.to_string()
}

/// Variant name of a plain selector enum
fn variant(value: &impl fmt::Debug) -> String {
    format!("{value:?}")
}

/// Variant name of an attribute operator (the type has no `Debug` impl)
fn attr_operator_name(value: &AttrSelectorOperator) -> &'static str {
    match value {
        AttrSelectorOperator::Equal => "Equal",
        AttrSelectorOperator::Includes => "Includes",
        AttrSelectorOperator::DashMatch => "DashMatch",
        AttrSelectorOperator::Prefix => "Prefix",
        AttrSelectorOperator::Substring => "Substring",
        AttrSelectorOperator::Suffix => "Suffix",
    }
}

/// Variant name of an nth pseudo-class type (the type has no `Debug` impl)
fn nth_type_name(value: &NthType) -> &'static str {
    match value {
        NthType::Child => "Child",
        NthType::LastChild => "LastChild",
        NthType::OnlyChild => "OnlyChild",
        NthType::OfType => "OfType",
        NthType::LastOfType => "LastOfType",
        NthType::OnlyOfType => "OnlyOfType",
        NthType::Col => "Col",
        NthType::LastCol => "LastCol",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn components(list: &SelectorList) -> &[SelectorComponent] {
        &list.selectors[0].compounds[0].components
    }

    #[test]
    fn test_parse_type_and_list() {
        let list = parse_selector_list("img, area , IFRAME").unwrap();
        assert_eq!(list.selectors.len(), 3);
        assert_eq!(
            list.selectors[2].compounds[0].components,
            vec![SelectorComponent::Type("iframe".to_string())]
        );
    }

    #[test]
    fn test_parse_compound() {
        let list = parse_selector_list("input#name.big[type=\"text\" i]").unwrap();
        let parts = components(&list);
        assert_eq!(parts.len(), 4);
        assert!(parts.contains(&SelectorComponent::Type("input".to_string())));
        assert!(parts.contains(&SelectorComponent::Id("name".to_string())));
        assert!(parts.contains(&SelectorComponent::Class("big".to_string())));
        let attr = parts
            .iter()
            .find_map(|p| match p {
                SelectorComponent::Attribute(attr) => Some(attr),
                _ => None,
            })
            .unwrap();
        assert_eq!(attr.name, "type");
        assert_eq!(attr.matcher, Some(AttributeMatcher::Exact("text".to_string())));
        assert!(attr.case_insensitive);
    }

    #[test]
    fn test_attribute_case_defaults_to_sensitive() {
        let list = parse_selector_list("input[type=hidden]").unwrap();
        let attr = components(&list)
            .iter()
            .find_map(|p| match p {
                SelectorComponent::Attribute(attr) => Some(attr),
                _ => None,
            })
            .unwrap();
        assert!(!attr.case_insensitive);
    }

    #[test]
    fn test_parse_structural_pseudo_classes() {
        let list = parse_selector_list(":first-child, :last-child, :only-child, :root, :empty").unwrap();
        let pseudos: Vec<&SelectorComponent> = list
            .selectors
            .iter()
            .map(|s| &s.compounds[0].components[0])
            .collect();
        assert_eq!(
            pseudos,
            vec![
                &SelectorComponent::PseudoClass(PseudoClass::FirstChild),
                &SelectorComponent::PseudoClass(PseudoClass::LastChild),
                &SelectorComponent::PseudoClass(PseudoClass::OnlyChild),
                &SelectorComponent::PseudoClass(PseudoClass::Root),
                &SelectorComponent::PseudoClass(PseudoClass::Empty),
            ]
        );
    }

    #[test]
    fn test_parse_not_with_list() {
        let list =
            parse_selector_list("input:not([type=\"hidden\"], [type=submit])").unwrap();
        let inner = components(&list)
            .iter()
            .find_map(|p| match p {
                SelectorComponent::PseudoClass(PseudoClass::Not(inner)) => Some(inner),
                _ => None,
            })
            .unwrap();
        assert_eq!(inner.len(), 2);
    }

    #[test]
    fn test_parse_combinators() {
        let list = parse_selector_list("table > tr td").unwrap();
        let sel = &list.selectors[0];
        assert_eq!(sel.compounds.len(), 3);
        assert_eq!(
            sel.compounds[0].components,
            vec![SelectorComponent::Type("table".to_string())]
        );
        assert_eq!(sel.combinators, vec![Combinator::Child, Combinator::Descendant]);

        let tight = parse_selector_list("ul>li").unwrap();
        assert_eq!(tight.selectors[0].combinators, vec![Combinator::Child]);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_selector_list("  "), Err(SelectorError::Empty));
        assert!(matches!(parse_selector_list("div,"), Err(SelectorError::Syntax(_))));
        assert!(matches!(parse_selector_list("[alt"), Err(SelectorError::Syntax(_))));
        assert!(matches!(parse_selector_list("div > > p"), Err(SelectorError::Syntax(_))));
        assert!(matches!(parse_selector_list("p {} a"), Err(SelectorError::Syntax(_))));
    }

    #[test]
    fn test_unsupported_constructs() {
        assert!(matches!(
            parse_selector_list("a:hover"),
            Err(SelectorError::UnsupportedPseudoClass(_))
        ));
        assert!(matches!(
            parse_selector_list("li:nth-child(2)"),
            Err(SelectorError::UnsupportedPseudoClass(_))
        ));
        assert!(matches!(
            parse_selector_list("h1 ~ p"),
            Err(SelectorError::Unsupported(_))
        ));
    }
}
