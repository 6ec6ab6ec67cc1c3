//! JSGF grammar document rendering.

use super::Expansion;
use crate::error::{GrammarError, Result};

/// Header line of every generated grammar.
pub const JSGF_HEADER: &str = "#JSGF V1.0;";

/// Characters with a meaning in JSGF that cannot appear in a rule name.
/// A `.` would make `<a.b>` read as a reference qualified by grammar name.
const RESERVED_CHARS: &[char] = &[
    '<', '>', ';', '=', '|', '*', '+', '(', ')', '[', ']', '{', '}', '/', '"', '\\', '.',
];

/// Names of the JSGF special rules.
const SPECIAL_RULES: &[&str] = &["NULL", "VOID"];

/// Check that `name` can be used as a JSGF grammar and rule name.
pub fn validate_rule_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && !name
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || RESERVED_CHARS.contains(&c))
        && !SPECIAL_RULES.contains(&name);
    if valid {
        Ok(())
    } else {
        Err(GrammarError::InvalidRuleName {
            name: name.to_string(),
        })
    }
}

/// Render a complete grammar declaring one public rule.
pub fn render_grammar(rule_name: &str, body: &Expansion) -> Result<String> {
    validate_rule_name(rule_name)?;
    Ok(format!(
        "{JSGF_HEADER}\ngrammar {rule_name};\npublic <{rule_name}> = {body};\n"
    ))
}
