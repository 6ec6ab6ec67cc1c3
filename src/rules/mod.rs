//! Rule specification input and the validated rule tree.
//!
//! A rule specification is a JSON mapping with exactly one key naming a rule
//! type, whose value is an ordered list of tokens and nested rule mappings.
//!
//! # Format Overview
//!
//! ```text
//! rule      = '{' rule_type ':' '[' element { ',' element } ']' '}'
//! element   = token | rule
//! token     = '"' word { ' ' word } '"'
//! word      = (uppercase_letter | digit) +
//! rule_type = "ThisWillBeSaidOnce"
//!           | "ThisCanBeSaidOnce"
//!           | "ThisWillBeSaidWithOptionalRepetitions"
//!           | "ThisCanBeSaidWithOptionalRepetitions"
//!           | "OneOfTheseWillBeSaidOnce"
//!           | "OneOfTheseCanBeSaidOnce"
//!           | "OneOfTheseWillBeSaidWithOptionalRepetitions"
//!           | "OneOfTheseCanBeSaidWithOptionalRepetitions"
//! ```
//!
//! # Rule Types
//!
//! | Rule type | Combination | May be omitted | Repeats |
//! |-----------|-------------|----------------|---------|
//! | ThisWillBeSaidOnce | all, in order | no | no |
//! | ThisCanBeSaidOnce | all, in order | yes | no |
//! | ThisWillBeSaidWithOptionalRepetitions | all, in order | no | one or more |
//! | ThisCanBeSaidWithOptionalRepetitions | all, in order | yes | one or more |
//! | OneOfTheseWillBeSaidOnce | exactly one | no | no |
//! | OneOfTheseCanBeSaidOnce | exactly one | yes | no |
//! | OneOfTheseWillBeSaidWithOptionalRepetitions | exactly one | no | at most twice |
//! | OneOfTheseCanBeSaidWithOptionalRepetitions | exactly one | yes | at most twice |
//!
//! # Example
//!
//! ```text
//! {"ThisWillBeSaidOnce": [
//!     {"OneOfTheseCanBeSaidOnce": ["HELLO COMPUTER", "GREETINGS ROBOT"]},
//!     {"OneOfTheseWillBeSaidOnce": ["GO", "MOVE"]},
//!     {"ThisWillBeSaidWithOptionalRepetitions": [
//!         {"OneOfTheseWillBeSaidOnce": ["10", "20", "30"]},
//!         {"OneOfTheseWillBeSaidOnce": ["LEFT", "RIGHT", "FORWARD"]}
//!     ]},
//!     {"OneOfTheseWillBeSaidOnce": ["EXECUTE", "DO IT"]},
//!     {"ThisCanBeSaidOnce": ["THANK YOU"]}
//! ]}
//! ```

mod ast;
mod parser;
mod spec;

pub use ast::*;
pub use parser::build_tree;
pub use spec::SpecValue;

use crate::error::{GrammarError, Result};

/// Parse a JSON rule specification into a validated rule tree.
pub fn parse(input: &str) -> Result<GrammarTree> {
    let value: SpecValue =
        serde_json::from_str(input).map_err(|source| GrammarError::SpecSyntax { source })?;
    let tree = build_tree(&value)?;
    tracing::debug!(
        rule_type = %tree.rule_type(),
        depth = tree.depth(),
        "parsed rule specification"
    );
    Ok(tree)
}

/// Parse a JSON rule specification file.
pub fn parse_file(path: &std::path::Path) -> Result<GrammarTree> {
    let content = std::fs::read_to_string(path).map_err(|e| GrammarError::read(path, e))?;
    parse(&content)
}
