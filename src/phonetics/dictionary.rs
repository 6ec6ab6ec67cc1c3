//! Pronunciation dictionary assembly.

use std::collections::HashSet;

use super::PronunciationLookup;
use crate::error::{GrammarError, Result};
use crate::rules::RuleGroup;

/// Distinct words of every token in the tree, in first-seen order.
pub fn collect_words(tree: &RuleGroup) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut words = Vec::new();
    tree.for_each_token(&mut |token| {
        for word in token.words() {
            if seen.insert(word) {
                words.push(word);
            }
        }
    });
    words
}

/// Build dictionary text for `words`.
///
/// Every word is looked up before failing, so all missing words are reported
/// together.
pub fn build_dictionary(words: &[&str], lookup: &dyn PronunciationLookup) -> Result<String> {
    let mut text = String::new();
    let mut missing = Vec::new();

    for &word in words {
        match lookup.pronunciations(word) {
            Some(phones) if !phones.is_empty() => {
                for (n, pronunciation) in phones.iter().enumerate() {
                    if n == 0 {
                        text.push_str(word);
                    } else {
                        text.push_str(&format!("{word}({})", n + 1));
                    }
                    text.push('\t');
                    text.push_str(pronunciation);
                    text.push('\n');
                }
            }
            _ => missing.push(word.to_string()),
        }
    }

    if !missing.is_empty() {
        return Err(GrammarError::UnknownWordPronunciation { words: missing });
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonetics::PhoneticTable;
    use crate::rules::parse;

    #[test]
    fn test_words_split_and_deduplicated() {
        let tree = parse(
            r#"{"ThisWillBeSaidOnce": [
                {"OneOfTheseWillBeSaidOnce": ["DO IT", "EXECUTE"]},
                {"ThisCanBeSaidWithOptionalRepetitions": ["DO", "IT AGAIN"]}
            ]}"#,
        )
        .unwrap();
        assert_eq!(collect_words(&tree), vec!["DO", "IT", "EXECUTE", "AGAIN"]);
    }

    #[test]
    fn test_dictionary_lines_with_alternates() {
        let table = PhoneticTable::from_entries([
            ("READ", "R IY D"),
            ("READ", "R EH D"),
            ("IT", "IH T"),
        ]);
        let text = build_dictionary(&["READ", "IT"], &table).unwrap();
        assert_eq!(text, "READ\tR IY D\nREAD(2)\tR EH D\nIT\tIH T\n");
    }

    #[test]
    fn test_missing_words_batched() {
        let table = PhoneticTable::from_entries([("GO", "G OW")]);
        let err = build_dictionary(&["ZORP", "GO", "BLIX"], &table).unwrap_err();
        match err {
            GrammarError::UnknownWordPronunciation { words } => {
                assert_eq!(words, vec!["ZORP", "BLIX"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
