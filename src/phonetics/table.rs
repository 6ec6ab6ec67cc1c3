//! In-memory phonetic table and its lookup-list loader.

use std::collections::HashMap;
use std::path::Path;

use super::PronunciationLookup;
use crate::error::{GrammarError, Result};

/// File name of the phonetic lookup list inside an acoustic model directory.
pub const DEFAULT_LOOKUP_LIST: &str = "LanguageModelGeneratorLookupList.text";

/// Word to pronunciation table.
///
/// Each word maps to one or more phone strings; the first is the primary
/// pronunciation and any others are alternates.
#[derive(Debug, Clone, Default)]
pub struct PhoneticTable {
    entries: HashMap<String, Vec<String>>,
}

impl PhoneticTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(word, phones)` pairs. Repeated words add alternates.
    pub fn from_entries<W, P>(entries: impl IntoIterator<Item = (W, P)>) -> Self
    where
        W: Into<String>,
        P: AsRef<str>,
    {
        let mut table = Self::new();
        for (word, phones) in entries {
            table.insert(word, phones.as_ref());
        }
        table
    }

    /// Add a pronunciation for `word`, after any it already has.
    pub fn insert(&mut self, word: impl Into<String>, phones: &str) {
        let phones = normalize_phones(phones);
        let alternates = self.entries.entry(word.into()).or_default();
        if !alternates.contains(&phones) {
            alternates.push(phones);
        }
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a Sphinx-style lookup list.
    ///
    /// Lines are `WORD PHONES...`; `WORD(2)` marks an alternate. Blank lines
    /// and lines starting with `;;;` or `#` are skipped. `origin` names the
    /// source in error messages.
    pub fn parse(text: &str, origin: &str) -> Result<Self> {
        let mut table = Self::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with(";;;") || line.starts_with('#') {
                continue;
            }

            let (word, phones) = match line.split_once(char::is_whitespace) {
                Some((word, phones)) if !phones.trim().is_empty() => (word, phones),
                _ => {
                    return Err(GrammarError::PhoneticTable {
                        path: origin.to_string(),
                        line: idx + 1,
                        message: format!("word '{line}' has no phones"),
                    });
                }
            };

            table.insert(strip_alternate_marker(word), phones);
        }
        Ok(table)
    }

    /// Load the lookup list shipped with an acoustic model.
    pub fn load(acoustic_model: &Path, lookup_list_name: &str) -> Result<Self> {
        let path = acoustic_model.join(lookup_list_name);
        let text = std::fs::read_to_string(&path).map_err(|e| GrammarError::read(&path, e))?;
        let table = Self::parse(&text, &path.display().to_string())?;
        tracing::info!("Loaded {} pronunciations from {:?}", table.len(), path);
        Ok(table)
    }
}

impl PronunciationLookup for PhoneticTable {
    fn pronunciations(&self, word: &str) -> Option<&[String]> {
        self.entries.get(word).map(Vec::as_slice)
    }
}

/// `WORD(2)` -> `WORD`
fn strip_alternate_marker(word: &str) -> &str {
    match word.strip_suffix(')').and_then(|w| w.rsplit_once('(')) {
        Some((base, n)) if !base.is_empty() && !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()) => {
            base
        }
        _ => word,
    }
}

fn normalize_phones(phones: &str) -> String {
    phones.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lookup_list() {
        let text = ";;; comment\n\nHELLO\tHH AH L OW\nHELLO(2)  HH EH   L OW\nGO G OW\n# note\n";
        let table = PhoneticTable::parse(text, "test").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.pronunciations("HELLO").unwrap(),
            &["HH AH L OW".to_string(), "HH EH L OW".to_string()]
        );
        assert_eq!(table.pronunciations("GO").unwrap(), &["G OW".to_string()]);
        assert!(table.pronunciations("STOP").is_none());
    }

    #[test]
    fn test_word_without_phones_is_error() {
        let err = PhoneticTable::parse("GO G OW\nSTOP\n", "list.text").unwrap_err();
        assert!(matches!(
            err,
            GrammarError::PhoneticTable { line: 2, ref path, .. } if path == "list.text"
        ));
    }

    #[test]
    fn test_alternate_marker() {
        assert_eq!(strip_alternate_marker("READ(2)"), "READ");
        assert_eq!(strip_alternate_marker("READ"), "READ");
        assert_eq!(strip_alternate_marker("(2)"), "(2)");
        assert_eq!(strip_alternate_marker("A(B)"), "A(B)");
    }

    #[test]
    fn test_duplicate_pronunciation_ignored() {
        let table = PhoneticTable::from_entries([("GO", "G OW"), ("GO", "G  OW")]);
        assert_eq!(table.pronunciations("GO").unwrap().len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = PhoneticTable::load(dir.path(), DEFAULT_LOOKUP_LIST).unwrap_err();
        assert!(matches!(err, GrammarError::FileReadError { .. }));
    }

    #[test]
    fn test_load_from_model_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_LOOKUP_LIST), "LEFT\tL EH F T\n").unwrap();
        let table = PhoneticTable::load(dir.path(), DEFAULT_LOOKUP_LIST).unwrap();
        assert_eq!(table.pronunciations("LEFT").unwrap(), &["L EH F T".to_string()]);
    }
}
