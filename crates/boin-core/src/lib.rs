//! Vowel-pattern lookup over a romaji dictionary.
//!
//! A word such as `amai` is reduced to its vowel skeleton `aai`; a user who
//! can only type the five vowels then finds it by typing `aai` (or a prefix
//! of it). See [`query()`] for the entry point.

pub mod dict;
pub mod matcher;
pub mod query;
pub mod rank;
pub mod settings;
pub mod vowel;

pub use dict::{DictEntry, DictError, DuplicatePolicy, VowelDictionary};
pub use matcher::matches;
pub use query::{query, query_with_settings, Candidate};
pub use rank::{rank_key, RankKey, Tier};
pub use vowel::{extract_vowels, Vowel};
