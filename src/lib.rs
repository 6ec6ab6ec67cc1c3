//! # Voxgram
//!
//! Compiles declarative voice-command rules into the artifacts a
//! grammar-constrained speech recognizer needs.
//!
//! This library provides:
//! - A JSON rule format with eight rule types for sequences, choices,
//!   optional parts and repetitions
//! - Validation of rule shape and uppercase-only vocabulary
//! - JSGF grammar generation
//! - Pronunciation dictionary generation from an acoustic model's phonetic
//!   lookup list
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`rules`] - Rule specification parsing and the validated rule tree
//! - [`grammar`] - Rule expansion and JSGF rendering
//! - [`phonetics`] - Pronunciation lookup and dictionary generation
//! - [`compiler`] - The compile pipeline and its configuration
//! - [`writer`] - Atomic output of `.gram` / `.dic` files
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! voxgram commands.json --name robot --acoustic-model models/AcousticModelEnglish
//! ```
//!
//! ### Library
//!
//! ```no_run
//! let spec = r#"{"ThisWillBeSaidOnce": [
//!     {"OneOfTheseWillBeSaidOnce": ["GO", "MOVE"]},
//!     {"OneOfTheseWillBeSaidOnce": ["LEFT", "RIGHT"]}
//! ]}"#;
//! let files = voxgram::generate_grammar(spec, "robot", "models/AcousticModelEnglish")?;
//! println!("{}", files.grammar_path.display());
//! # Ok::<(), voxgram::GrammarError>(())
//! ```
//!
//! The generated `.gram` file is JSGF, so the recognizer must be told to load
//! it as a JSGF grammar rather than a statistical language model.

pub mod compiler;
pub mod error;
pub mod grammar;
pub mod phonetics;
pub mod rules;
pub mod writer;

// Re-export main types for convenience
pub use compiler::{
    generate_grammar, CompiledGrammar, GeneratorConfig, GrammarCompiler, GrammarGenerator,
};
pub use error::{GrammarError, Result};
pub use phonetics::{PhoneticTable, PronunciationLookup};
pub use rules::{GrammarTree, RuleNode, RuleType, Token};
pub use writer::GeneratedFiles;

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmGrammarCompiler;
