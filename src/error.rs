//! Error types for the Voxgram grammar compiler.
//!
//! This module provides a unified error type [`GrammarError`] that covers
//! all error conditions that can occur while reading a rule specification,
//! validating the rule tree, resolving pronunciations, and writing artifacts.

use thiserror::Error;

/// Result type alias using [`GrammarError`].
pub type Result<T> = std::result::Result<T, GrammarError>;

/// Unified error type for all Voxgram operations.
#[derive(Error, Debug)]
pub enum GrammarError {
    // ============ Rule Specification Errors ============
    /// A mapping key is missing, duplicated, or not a recognized rule type
    #[error("Malformed rule key at {path}: {found}")]
    MalformedRuleKey { path: String, found: String },

    /// A rule's child sequence is empty
    #[error("Rule '{rule}' at {path} has an empty body")]
    EmptyRuleBody { path: String, rule: String },

    /// A token contains lowercase characters
    #[error("Token '{token}' at {path} contains lowercase characters (tokens must be uppercase)")]
    LowercaseToken { path: String, token: String },

    /// A token contains characters other than uppercase letters, digits and single spaces
    #[error("Invalid token '{token}' at {path}: {reason}")]
    InvalidToken {
        path: String,
        token: String,
        reason: String,
    },

    /// A value of the wrong shape appeared in the specification
    #[error("Unexpected {found} at {path} (expected a token string or a rule mapping)")]
    UnexpectedValue { path: String, found: String },

    /// The specification text is not valid JSON
    #[error("Rule specification is not valid JSON: {source}")]
    SpecSyntax {
        #[source]
        source: serde_json::Error,
    },

    // ============ Grammar Errors ============
    /// Rule or grammar name cannot be expressed in JSGF
    #[error("Invalid rule name '{name}' (names must be non-empty and contain no whitespace, dots or JSGF operators)")]
    InvalidRuleName { name: String },

    // ============ Pronunciation Errors ============
    /// One or more words have no entry in the phonetic lookup
    #[error("No pronunciation found for: {}", .words.join(", "))]
    UnknownWordPronunciation { words: Vec<String> },

    /// The phonetic lookup list could not be parsed
    #[error("Malformed phonetic lookup list '{path}' at line {line}: {message}")]
    PhoneticTable {
        path: String,
        line: usize,
        message: String,
    },

    // ============ I/O Errors ============
    /// Output base name cannot be used as a file name
    #[error("Invalid output file name '{name}'")]
    InvalidFileName { name: String },

    /// Error reading an input file
    #[error("Failed to read '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error persisting an output file
    #[error("Failed to write '{path}': {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ============ WASM Errors ============
    /// WASM-specific error
    #[cfg(feature = "wasm")]
    #[error("WASM error: {message}")]
    WasmError { message: String },
}

impl GrammarError {
    /// Create a malformed rule key error
    pub fn malformed_key(path: impl Into<String>, found: impl Into<String>) -> Self {
        Self::MalformedRuleKey {
            path: path.into(),
            found: found.into(),
        }
    }

    /// Create an invalid token error
    pub fn invalid_token(
        path: impl Into<String>,
        token: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidToken {
            path: path.into(),
            token: token.into(),
            reason: reason.into(),
        }
    }

    /// Create a file read error
    pub fn read(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::FileReadError {
            path: path.display().to_string(),
            source,
        }
    }

    /// Create a file write error
    pub fn write(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::FileWriteError {
            path: path.display().to_string(),
            source,
        }
    }

    /// Whether this error was raised while validating the rule specification.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MalformedRuleKey { .. }
                | Self::EmptyRuleBody { .. }
                | Self::LowercaseToken { .. }
                | Self::InvalidToken { .. }
                | Self::UnexpectedValue { .. }
                | Self::SpecSyntax { .. }
        )
    }
}
