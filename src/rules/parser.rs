//! Builds a validated rule tree from a raw specification value.

use super::ast::{GrammarTree, RuleGroup, RuleNode, RuleType, Token};
use super::spec::SpecValue;
use crate::error::{GrammarError, Result};

/// Build the rule tree for a single top-level rule mapping.
///
/// Every shape, key and token constraint is checked here, so a tree that
/// builds successfully can be expanded without further validation.
pub fn build_tree(value: &SpecValue) -> Result<GrammarTree> {
    build_group(value, "")
}

/// Build a group from the mapping located at `at` ("" for the root).
fn build_group(value: &SpecValue, at: &str) -> Result<RuleGroup> {
    let location = if at.is_empty() { "root" } else { at };

    let entries = match value {
        SpecValue::Mapping(entries) => entries,
        other => {
            return Err(GrammarError::malformed_key(
                location,
                format!("expected a rule mapping, found {}", other.describe()),
            ));
        }
    };

    let (key, body) = match entries.as_slice() {
        [] => {
            return Err(GrammarError::malformed_key(location, "mapping has no rule key"));
        }
        [entry] => (&entry.0, &entry.1),
        _ => return Err(GrammarError::malformed_key(location, describe_extra_keys(entries))),
    };

    let rule_type = RuleType::from_key(key).ok_or_else(|| {
        GrammarError::malformed_key(location, format!("unrecognized rule type '{key}'"))
    })?;

    let path = if at.is_empty() {
        key.clone()
    } else {
        format!("{at}.{key}")
    };

    let items = match body {
        SpecValue::List(items) => items,
        SpecValue::Null => {
            return Err(GrammarError::EmptyRuleBody {
                path,
                rule: key.clone(),
            });
        }
        other => {
            return Err(GrammarError::UnexpectedValue {
                path,
                found: other.describe(),
            });
        }
    };

    let children = items
        .iter()
        .enumerate()
        .map(|(idx, item)| build_element(item, &format!("{path}[{idx}]")))
        .collect::<Result<Vec<_>>>()?;

    RuleGroup::at(rule_type, children, &path)
}

fn build_element(value: &SpecValue, at: &str) -> Result<RuleNode> {
    match value {
        SpecValue::Text(text) => Token::at(text, at).map(RuleNode::Literal),
        SpecValue::Mapping(_) => build_group(value, at).map(RuleNode::Group),
        other => Err(GrammarError::UnexpectedValue {
            path: at.to_string(),
            found: other.describe(),
        }),
    }
}

fn describe_extra_keys(entries: &[(String, SpecValue)]) -> String {
    for (idx, (key, _)) in entries.iter().enumerate() {
        if entries[..idx].iter().any(|(earlier, _)| earlier == key) {
            return format!("duplicate key '{key}'");
        }
    }
    let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
    format!(
        "mapping has {} keys (expected exactly one): {}",
        keys.len(),
        keys.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::super::parse;
    use super::*;

    #[test]
    fn test_parse_single_token() {
        let tree = parse(r#"{"ThisWillBeSaidOnce": ["HELLO"]}"#).unwrap();
        assert_eq!(tree.rule_type(), RuleType::ThisWillBeSaidOnce);
        assert_eq!(tree.children().len(), 1);
        assert!(matches!(&tree.children()[0], RuleNode::Literal(t) if t.as_str() == "HELLO"));
    }

    #[test]
    fn test_parse_nested_keeps_order() {
        let tree = parse(
            r#"{"ThisWillBeSaidOnce": [
                {"OneOfTheseWillBeSaidOnce": ["GO", "MOVE"]},
                "NOW",
                {"ThisCanBeSaidOnce": ["THANK YOU"]}
            ]}"#,
        )
        .unwrap();
        let kinds: Vec<_> = tree
            .children()
            .iter()
            .map(|c| match c {
                RuleNode::Literal(t) => t.to_string(),
                RuleNode::Group(g) => g.rule_type().key().to_string(),
            })
            .collect();
        assert_eq!(
            kinds,
            vec!["OneOfTheseWillBeSaidOnce", "NOW", "ThisCanBeSaidOnce"]
        );
    }

    #[test]
    fn test_unknown_key() {
        let err = parse(r#"{"ThisWillBeSaidTwice": ["HELLO"]}"#).unwrap_err();
        assert!(matches!(err, GrammarError::MalformedRuleKey { ref path, .. } if path == "root"));
    }

    #[test]
    fn test_duplicate_key() {
        let err = parse(r#"{"ThisWillBeSaidOnce": ["A"], "ThisWillBeSaidOnce": ["B"]}"#)
            .unwrap_err();
        match err {
            GrammarError::MalformedRuleKey { found, .. } => assert!(found.contains("duplicate")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_multiple_top_level_rules_rejected() {
        let err = parse(r#"{"ThisWillBeSaidOnce": ["A"], "ThisCanBeSaidOnce": ["B"]}"#)
            .unwrap_err();
        assert!(matches!(err, GrammarError::MalformedRuleKey { .. }));
    }

    #[test]
    fn test_empty_mapping_and_non_mapping_root() {
        assert!(matches!(
            parse("{}").unwrap_err(),
            GrammarError::MalformedRuleKey { .. }
        ));
        assert!(matches!(
            parse(r#"["HELLO"]"#).unwrap_err(),
            GrammarError::MalformedRuleKey { .. }
        ));
    }

    #[test]
    fn test_empty_and_absent_body() {
        let err = parse(r#"{"ThisWillBeSaidOnce": []}"#).unwrap_err();
        assert!(matches!(err, GrammarError::EmptyRuleBody { .. }));

        let err = parse(r#"{"ThisWillBeSaidOnce": null}"#).unwrap_err();
        assert!(matches!(err, GrammarError::EmptyRuleBody { .. }));
    }

    #[test]
    fn test_nested_lowercase_reports_token_and_path() {
        let err = parse(
            r#"{"ThisWillBeSaidOnce": [
                "GO",
                {"OneOfTheseWillBeSaidOnce": ["LEFT", {"ThisCanBeSaidOnce": ["right"]}]}
            ]}"#,
        )
        .unwrap_err();
        match err {
            GrammarError::LowercaseToken { token, path } => {
                assert_eq!(token, "right");
                assert_eq!(
                    path,
                    "ThisWillBeSaidOnce[1].OneOfTheseWillBeSaidOnce[1].ThisCanBeSaidOnce[0]"
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_string_element() {
        let err = parse(r#"{"OneOfTheseWillBeSaidOnce": [10, 20]}"#).unwrap_err();
        assert!(matches!(
            err,
            GrammarError::UnexpectedValue { ref path, .. } if path == "OneOfTheseWillBeSaidOnce[0]"
        ));

        let err = parse(r#"{"ThisWillBeSaidOnce": "HELLO"}"#).unwrap_err();
        assert!(matches!(err, GrammarError::UnexpectedValue { .. }));
    }

    #[test]
    fn test_invalid_json() {
        let err = parse(r#"{"ThisWillBeSaidOnce": ["HELLO"]"#).unwrap_err();
        assert!(matches!(err, GrammarError::SpecSyntax { .. }));
    }
}
