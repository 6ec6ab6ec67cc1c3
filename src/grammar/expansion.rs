//! Rule expansions: the grammar-side form of a rule tree.

use std::collections::BTreeSet;
use std::fmt;

use crate::rules::{Combination, Obligation, Repetition, RuleGroup, RuleNode, Token};

/// A JSGF rule expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expansion {
    /// A word or phrase
    Token(Token),
    /// All items, in order
    Sequence(Vec<Expansion>),
    /// Exactly one item
    Alternatives(Vec<Expansion>),
    /// The item or nothing
    Optional(Box<Expansion>),
    /// The item, one or more times
    OneOrMore(Box<Expansion>),
    /// The item, zero or more times
    ZeroOrMore(Box<Expansion>),
}

impl Expansion {
    /// Expand a rule group, children first.
    pub fn from_group(group: &RuleGroup) -> Self {
        let parts: Vec<Expansion> = group.children().iter().map(Self::from_node).collect();
        let rule_type = group.rule_type();

        use Combination::*;
        use Obligation::*;
        use Repetition::*;
        match (rule_type.combination(), rule_type.obligation(), rule_type.repetition()) {
            (Sequence, Required, Single) => Self::sequence(parts),
            (Sequence, Optional, Single) => Self::optional(Self::sequence(parts)),
            (Sequence, Required, Repeatable) => Self::OneOrMore(Box::new(Self::sequence(parts))),
            (Sequence, Optional, Repeatable) => Self::ZeroOrMore(Box::new(Self::sequence(parts))),
            (Selection, Required, Single) => Self::alternatives(parts),
            (Selection, Optional, Single) => Self::optional(Self::alternatives(parts)),
            // A repeated selection allows exactly one extra choice, never a loop.
            (Selection, Required, Repeatable) => Self::repeat_once(Self::alternatives(parts)),
            (Selection, Optional, Repeatable) => {
                Self::optional(Self::repeat_once(Self::alternatives(parts)))
            }
        }
    }

    /// Expand any rule node.
    pub fn from_node(node: &RuleNode) -> Self {
        match node {
            RuleNode::Literal(token) => Self::Token(token.clone()),
            RuleNode::Group(group) => Self::from_group(group),
        }
    }

    fn sequence(parts: Vec<Expansion>) -> Self {
        let mut items = Vec::with_capacity(parts.len());
        for part in parts {
            match part {
                Self::Sequence(inner) => items.extend(inner),
                other => items.push(other),
            }
        }
        if items.len() == 1 {
            items.remove(0)
        } else {
            Self::Sequence(items)
        }
    }

    fn alternatives(mut parts: Vec<Expansion>) -> Self {
        if parts.len() == 1 {
            parts.remove(0)
        } else {
            Self::Alternatives(parts)
        }
    }

    fn optional(inner: Expansion) -> Self {
        Self::Optional(Box::new(inner))
    }

    fn repeat_once(inner: Expansion) -> Self {
        Self::Sequence(vec![inner.clone(), Self::optional(inner)])
    }

    /// Whether the expansion permits an unbounded number of repetitions.
    pub fn is_unbounded(&self) -> bool {
        match self {
            Self::Token(_) => false,
            Self::Sequence(items) | Self::Alternatives(items) => items.iter().any(Self::is_unbounded),
            Self::Optional(inner) => inner.is_unbounded(),
            Self::OneOrMore(_) | Self::ZeroOrMore(_) => true,
        }
    }

    /// Check whether a space-separated utterance is matched by this expansion.
    pub fn accepts(&self, utterance: &str) -> bool {
        let words: Vec<&str> = utterance.split_whitespace().collect();
        let start = BTreeSet::from([0]);
        self.advance(&words, &start).contains(&words.len())
    }

    /// All word positions reachable after matching this expansion from any of `starts`.
    fn advance(&self, words: &[&str], starts: &BTreeSet<usize>) -> BTreeSet<usize> {
        match self {
            Self::Token(token) => {
                let expected: Vec<&str> = token.words().collect();
                starts
                    .iter()
                    .filter(|&&pos| words[pos..].starts_with(&expected))
                    .map(|&pos| pos + expected.len())
                    .collect()
            }
            Self::Sequence(items) => items
                .iter()
                .fold(starts.clone(), |reached, item| item.advance(words, &reached)),
            Self::Alternatives(items) => items
                .iter()
                .flat_map(|item| item.advance(words, starts))
                .collect(),
            Self::Optional(inner) => {
                let mut reached = inner.advance(words, starts);
                reached.extend(starts.iter().copied());
                reached
            }
            Self::OneOrMore(inner) => Self::repeat(inner, words, starts),
            Self::ZeroOrMore(inner) => {
                let mut reached = Self::repeat(inner, words, starts);
                reached.extend(starts.iter().copied());
                reached
            }
        }
    }

    fn repeat(inner: &Expansion, words: &[&str], starts: &BTreeSet<usize>) -> BTreeSet<usize> {
        let mut reached = inner.advance(words, starts);
        let mut frontier = reached.clone();
        loop {
            let next: BTreeSet<usize> = inner
                .advance(words, &frontier)
                .difference(&reached)
                .copied()
                .collect();
            if next.is_empty() {
                return reached;
            }
            reached.extend(next.iter().copied());
            frontier = next;
        }
    }

    /// Write the expansion wrapped in parentheses unless it already groups itself.
    fn fmt_grouped(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alternatives(_) => write!(f, "{self}"),
            other => write!(f, "( {other} )"),
        }
    }
}

impl fmt::Display for Expansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(token) => write!(f, "{token}"),
            Self::Sequence(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Self::Alternatives(items) => {
                f.write_str("( ")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(" )")
            }
            Self::Optional(inner) => match inner.as_ref() {
                Self::Alternatives(items) => {
                    f.write_str("[ ")?;
                    for (i, item) in items.iter().enumerate() {
                        if i > 0 {
                            f.write_str(" | ")?;
                        }
                        write!(f, "{item}")?;
                    }
                    f.write_str(" ]")
                }
                other => write!(f, "[ {other} ]"),
            },
            Self::OneOrMore(inner) => {
                inner.fmt_grouped(f)?;
                f.write_str("+")
            }
            Self::ZeroOrMore(inner) => {
                inner.fmt_grouped(f)?;
                f.write_str("*")
            }
        }
    }
}
