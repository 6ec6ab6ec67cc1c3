//! Grammar compilation and generation.
//!
//! [`GrammarCompiler`] is the pure core: it turns a validated rule tree into
//! grammar and dictionary text using an injected [`PronunciationLookup`].
//! [`GrammarGenerator`] wraps it with specification parsing, phonetic table
//! loading and artifact writing.
//!
//! ## Pipeline
//!
//! 1. Parse and validate the JSON specification into a rule tree
//! 2. Load the acoustic model's phonetic lookup list
//! 3. Expand the tree into a JSGF rule and collect its distinct words
//! 4. Resolve every word's pronunciation, failing with all unknown words
//! 5. Write `<name>.gram` and `<name>.dic`
//!
//! [`PronunciationLookup`]: crate::phonetics::PronunciationLookup

mod compile;
mod generator;

pub use compile::{CompiledGrammar, GrammarCompiler};
pub use generator::{generate_grammar, GeneratorConfig, GrammarGenerator};
