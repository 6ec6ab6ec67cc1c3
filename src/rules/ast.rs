//! Rule tree types: tokens, rule types and the validated node tree.

use std::fmt;

use crate::error::{GrammarError, Result};

/// An uppercase word or phrase.
///
/// A phrase is a sequence of words separated by single spaces and is matched
/// as one unit in rule order, but split into words for the dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    /// Validate and wrap a token.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        Self::validate(&text, "<token>")?;
        Ok(Self(text))
    }

    /// Validate and wrap a token found at `path` in a specification.
    pub(crate) fn at(text: &str, path: &str) -> Result<Self> {
        Self::validate(text, path)?;
        Ok(Self(text.to_string()))
    }

    fn validate(text: &str, path: &str) -> Result<()> {
        if text.chars().any(char::is_lowercase) {
            return Err(GrammarError::LowercaseToken {
                path: path.to_string(),
                token: text.to_string(),
            });
        }
        if text.is_empty() {
            return Err(GrammarError::invalid_token(path, text, "token is empty"));
        }
        if text.starts_with(' ') || text.ends_with(' ') {
            return Err(GrammarError::invalid_token(
                path,
                text,
                "leading or trailing space",
            ));
        }
        if text.contains("  ") {
            return Err(GrammarError::invalid_token(
                path,
                text,
                "words must be separated by a single space",
            ));
        }
        if let Some(c) = text
            .chars()
            .find(|&c| !(c.is_uppercase() || c.is_ascii_digit() || c == ' '))
        {
            return Err(GrammarError::invalid_token(
                path,
                text,
                format!("character {c:?} is not an uppercase letter, digit or space"),
            ));
        }
        Ok(())
    }

    /// The token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The words making up this token, in order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split(' ')
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a group's children combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combination {
    /// All children, in declaration order
    Sequence,
    /// Exactly one child
    Selection,
}

/// Whether a group may be omitted from the utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Obligation {
    Required,
    Optional,
}

/// Whether a group's content may recur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repetition {
    Single,
    /// One-or-more for sequences; at most one extra selection for selections
    Repeatable,
}

/// The eight rule types a group can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleType {
    /// All children, in order, once
    ThisWillBeSaidOnce,
    /// All children, in order, once or omitted
    ThisCanBeSaidOnce,
    /// All children, in order, one or more times
    ThisWillBeSaidWithOptionalRepetitions,
    /// All children, in order, zero or more times
    ThisCanBeSaidWithOptionalRepetitions,
    /// Exactly one child, once
    OneOfTheseWillBeSaidOnce,
    /// Exactly one child, once or omitted
    OneOfTheseCanBeSaidOnce,
    /// One selection, said once or twice
    OneOfTheseWillBeSaidWithOptionalRepetitions,
    /// One selection, said once or twice, or omitted
    OneOfTheseCanBeSaidWithOptionalRepetitions,
}

impl RuleType {
    /// All rule types, sequence types first.
    pub const ALL: [RuleType; 8] = [
        Self::ThisWillBeSaidOnce,
        Self::ThisCanBeSaidOnce,
        Self::ThisWillBeSaidWithOptionalRepetitions,
        Self::ThisCanBeSaidWithOptionalRepetitions,
        Self::OneOfTheseWillBeSaidOnce,
        Self::OneOfTheseCanBeSaidOnce,
        Self::OneOfTheseWillBeSaidWithOptionalRepetitions,
        Self::OneOfTheseCanBeSaidWithOptionalRepetitions,
    ];

    /// Parse a rule type from its specification key. Matching is exact.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rt| rt.key() == key)
    }

    /// The specification key naming this rule type.
    pub fn key(&self) -> &'static str {
        match self {
            Self::ThisWillBeSaidOnce => "ThisWillBeSaidOnce",
            Self::ThisCanBeSaidOnce => "ThisCanBeSaidOnce",
            Self::ThisWillBeSaidWithOptionalRepetitions => "ThisWillBeSaidWithOptionalRepetitions",
            Self::ThisCanBeSaidWithOptionalRepetitions => "ThisCanBeSaidWithOptionalRepetitions",
            Self::OneOfTheseWillBeSaidOnce => "OneOfTheseWillBeSaidOnce",
            Self::OneOfTheseCanBeSaidOnce => "OneOfTheseCanBeSaidOnce",
            Self::OneOfTheseWillBeSaidWithOptionalRepetitions => {
                "OneOfTheseWillBeSaidWithOptionalRepetitions"
            }
            Self::OneOfTheseCanBeSaidWithOptionalRepetitions => {
                "OneOfTheseCanBeSaidWithOptionalRepetitions"
            }
        }
    }

    pub fn combination(&self) -> Combination {
        match self {
            Self::ThisWillBeSaidOnce
            | Self::ThisCanBeSaidOnce
            | Self::ThisWillBeSaidWithOptionalRepetitions
            | Self::ThisCanBeSaidWithOptionalRepetitions => Combination::Sequence,
            _ => Combination::Selection,
        }
    }

    pub fn obligation(&self) -> Obligation {
        match self {
            Self::ThisWillBeSaidOnce
            | Self::ThisWillBeSaidWithOptionalRepetitions
            | Self::OneOfTheseWillBeSaidOnce
            | Self::OneOfTheseWillBeSaidWithOptionalRepetitions => Obligation::Required,
            _ => Obligation::Optional,
        }
    }

    pub fn repetition(&self) -> Repetition {
        match self {
            Self::ThisWillBeSaidOnce
            | Self::ThisCanBeSaidOnce
            | Self::OneOfTheseWillBeSaidOnce
            | Self::OneOfTheseCanBeSaidOnce => Repetition::Single,
            _ => Repetition::Repeatable,
        }
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A group of rule nodes combined according to a [`RuleType`].
///
/// Children are never empty and keep declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleGroup {
    rule_type: RuleType,
    children: Vec<RuleNode>,
}

/// The root of a rule definition; always a group.
pub type GrammarTree = RuleGroup;

impl RuleGroup {
    /// Create a group, rejecting an empty child list.
    pub fn new(rule_type: RuleType, children: Vec<RuleNode>) -> Result<Self> {
        Self::at(rule_type, children, rule_type.key())
    }

    pub(crate) fn at(rule_type: RuleType, children: Vec<RuleNode>, path: &str) -> Result<Self> {
        if children.is_empty() {
            return Err(GrammarError::EmptyRuleBody {
                path: path.to_string(),
                rule: rule_type.key().to_string(),
            });
        }
        Ok(Self {
            rule_type,
            children,
        })
    }

    pub fn rule_type(&self) -> RuleType {
        self.rule_type
    }

    pub fn children(&self) -> &[RuleNode] {
        &self.children
    }

    /// Visit every token in the group, depth-first in declaration order.
    pub fn for_each_token<'a>(&'a self, f: &mut impl FnMut(&'a Token)) {
        for child in &self.children {
            child.for_each_token(&mut *f);
        }
    }

    /// Nesting depth, counting this group as 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|c| match c {
                RuleNode::Literal(_) => 0,
                RuleNode::Group(g) => g.depth(),
            })
            .max()
            .unwrap_or(0)
    }
}

/// A node of the rule tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleNode {
    /// A word or phrase
    Literal(Token),
    /// A nested rule
    Group(RuleGroup),
}

impl RuleNode {
    /// Create a validated literal node.
    pub fn literal(text: impl Into<String>) -> Result<Self> {
        Token::new(text).map(Self::Literal)
    }

    /// Create a validated group node.
    pub fn group(rule_type: RuleType, children: Vec<RuleNode>) -> Result<Self> {
        RuleGroup::new(rule_type, children).map(Self::Group)
    }

    /// Visit every token under this node, depth-first in declaration order.
    pub fn for_each_token<'a>(&'a self, f: &mut impl FnMut(&'a Token)) {
        match self {
            Self::Literal(token) => f(token),
            Self::Group(group) => group.for_each_token(f),
        }
    }
}
