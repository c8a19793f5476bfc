//! Romaji dictionary loading.
//!
//! The source format is one `romaji,native` pair per line. Only the first
//! comma separates the fields, so the native text may itself contain commas.
//! Blank lines and `#` comments are ignored. Entries keep the order in which
//! their key first appeared; that order breaks ranking ties.

mod entry;

pub use entry::DictEntry;

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: missing ',' separator: {content:?}")]
    MissingSeparator { line: usize, content: String },

    #[error("line {line}: empty romaji or native field: {content:?}")]
    EmptyField { line: usize, content: String },

    #[error("line {line}: duplicate romaji {romaji:?} (first defined on line {first_line})")]
    DuplicateKey {
        romaji: String,
        first_line: usize,
        line: usize,
    },
}

/// How a repeated romaji key is handled while loading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Last line wins silently.
    Overwrite,
    /// Last line wins and a warning is emitted.
    #[default]
    Warn,
    /// Loading fails with [`DictError::DuplicateKey`].
    Reject,
}

/// Insertion-ordered romaji → native mapping with precomputed skeletons.
///
/// Immutable once built; share it behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct VowelDictionary {
    entries: Vec<DictEntry>,
    index: HashMap<String, usize>,
}

impl VowelDictionary {
    /// Build from already-split pairs. Later duplicates overwrite earlier ones.
    pub fn from_pairs<I, R, N>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (R, N)>,
        R: Into<String>,
        N: Into<String>,
    {
        let mut dict = Self::default();
        for (romaji, native) in pairs {
            dict.upsert(DictEntry::new(romaji, native));
        }
        dict
    }

    /// Parse dictionary text, failing on the first malformed line.
    pub fn parse(text: &str, policy: DuplicatePolicy) -> Result<Self, DictError> {
        let mut dict = Self::default();
        let mut first_seen: HashMap<String, usize> = HashMap::new();

        for (i, raw) in text.lines().enumerate() {
            let line = i + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let Some((romaji, native)) = trimmed.split_once(',') else {
                return Err(DictError::MissingSeparator {
                    line,
                    content: raw.to_string(),
                });
            };
            let (romaji, native) = (romaji.trim(), native.trim());
            if romaji.is_empty() || native.is_empty() {
                return Err(DictError::EmptyField {
                    line,
                    content: raw.to_string(),
                });
            }

            if let Some(&first_line) = first_seen.get(romaji) {
                match policy {
                    DuplicatePolicy::Overwrite => {}
                    DuplicatePolicy::Warn => {
                        warn!(romaji, first_line, line, "duplicate romaji, keeping last");
                    }
                    DuplicatePolicy::Reject => {
                        return Err(DictError::DuplicateKey {
                            romaji: romaji.to_string(),
                            first_line,
                            line,
                        });
                    }
                }
            } else {
                first_seen.insert(romaji.to_string(), line);
            }

            dict.upsert(DictEntry::new(romaji, native));
        }

        info!(entries = dict.len(), "dictionary loaded");
        Ok(dict)
    }

    /// Read and parse a UTF-8 dictionary file.
    pub fn open(path: &Path, policy: DuplicatePolicy) -> Result<Self, DictError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text, policy)
    }

    /// Insert or replace by romaji. A replaced entry keeps its position.
    fn upsert(&mut self, entry: DictEntry) {
        match self.index.get(&entry.romaji) {
            Some(&pos) => self.entries[pos] = entry,
            None => {
                self.index.insert(entry.romaji.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    pub fn get(&self, romaji: &str) -> Option<&DictEntry> {
        self.index.get(romaji).map(|&pos| &self.entries[pos])
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[DictEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &DictEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
