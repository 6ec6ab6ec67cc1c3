//! Rule tree to grammar/dictionary compilation.

use serde::Serialize;

use crate::error::Result;
use crate::grammar::{render_grammar, validate_rule_name, Expansion};
use crate::phonetics::{build_dictionary, collect_words, PronunciationLookup};
use crate::rules::GrammarTree;

/// The two texts produced for one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompiledGrammar {
    /// JSGF grammar document
    pub grammar_text: String,
    /// Pronunciation dictionary, one word per line
    pub dictionary_text: String,
}

/// Compiles validated rule trees using an injected pronunciation source.
pub struct GrammarCompiler<'a> {
    lookup: &'a dyn PronunciationLookup,
}

impl<'a> GrammarCompiler<'a> {
    pub fn new(lookup: &'a dyn PronunciationLookup) -> Self {
        Self { lookup }
    }

    /// Compile `tree` into a grammar declaring the public rule `rule_name`.
    ///
    /// Pure: nothing is written. Unknown words are collected over the whole
    /// tree and reported together.
    pub fn compile(&self, tree: &GrammarTree, rule_name: &str) -> Result<CompiledGrammar> {
        validate_rule_name(rule_name)?;

        let body = Expansion::from_group(tree);
        let words = collect_words(tree);
        tracing::debug!(
            rule = rule_name,
            depth = tree.depth(),
            words = words.len(),
            "expanded rule tree"
        );

        let dictionary_text = build_dictionary(&words, self.lookup)?;
        let grammar_text = render_grammar(rule_name, &body)?;

        Ok(CompiledGrammar {
            grammar_text,
            dictionary_text,
        })
    }
}
