//! Pronunciation lookup and dictionary generation.
//!
//! The recognizer needs a phonetic entry for every word the grammar can
//! produce. Pronunciations come from a [`PronunciationLookup`], normally a
//! [`PhoneticTable`] loaded from the acoustic model's lookup list.

mod dictionary;
mod table;

pub use dictionary::{build_dictionary, collect_words};
pub use table::{PhoneticTable, DEFAULT_LOOKUP_LIST};

/// Source of word pronunciations.
pub trait PronunciationLookup {
    /// All known pronunciations of `word`, primary first.
    fn pronunciations(&self, word: &str) -> Option<&[String]>;
}
