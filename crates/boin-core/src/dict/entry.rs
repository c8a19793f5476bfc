use serde::Serialize;

use crate::vowel::{extract_vowels, is_long_vowel_word};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DictEntry {
    pub romaji: String,
    pub native: String,
    /// Derived from `romaji` in [`DictEntry::new`]; never authored.
    skeleton: String,
}

impl DictEntry {
    pub fn new(romaji: impl Into<String>, native: impl Into<String>) -> Self {
        let romaji = romaji.into();
        let skeleton = extract_vowels(&romaji);
        Self {
            romaji,
            native: native.into(),
            skeleton,
        }
    }

    /// Vowel skeleton of `romaji`.
    pub fn skeleton(&self) -> &str {
        &self.skeleton
    }

    /// True when the romaji carries a long-vowel mark (`-`).
    pub fn is_long_vowel(&self) -> bool {
        is_long_vowel_word(&self.romaji)
    }

    /// Entry with a hand-written skeleton, for exercising ranking paths that
    /// extraction alone cannot reach.
    #[cfg(test)]
    pub(crate) fn with_skeleton(romaji: &str, native: &str, skeleton: &str) -> Self {
        Self {
            romaji: romaji.into(),
            native: native.into(),
            skeleton: skeleton.into(),
        }
    }
}
