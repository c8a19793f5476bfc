//! Keystroke scripts for `boin replay`, and vowel checks for `boin query`.
//!
//! One character per key: a vowel types it, `<` is backspace, `!` gives up.
//! Whitespace is ignored so scripts can be grouped for readability.

use boin_core::Vowel;
use boin_session::SessionEvent;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum KeyScriptError {
    #[error("invalid key {key:?} at position {pos} (expected a, i, u, e, o, '<' or '!')")]
    InvalidKey { key: char, pos: usize },
    #[error("invalid vowel {key:?} at position {pos} (expected a, i, u, e or o)")]
    InvalidVowel { key: char, pos: usize },
}

/// Check that a typed query uses only the five vowels.
pub fn parse_vowels(input: &str) -> Result<Vec<Vowel>, KeyScriptError> {
    input
        .chars()
        .enumerate()
        .map(|(pos, c)| {
            Vowel::from_char(c).ok_or(KeyScriptError::InvalidVowel { key: c, pos })
        })
        .collect()
}

/// Input spelled with the kana on the vowel keys (`aui` → `あうい`).
pub fn kana_label(input: &str) -> String {
    input
        .chars()
        .map(|c| Vowel::from_char(c).map_or(c, Vowel::kana))
        .collect()
}

pub fn parse_keys(script: &str) -> Result<Vec<SessionEvent>, KeyScriptError> {
    script
        .chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(pos, c)| match c {
            '<' => Ok(SessionEvent::Backspace),
            '!' => Ok(SessionEvent::GiveUp),
            _ => Vowel::from_char(c)
                .map(SessionEvent::Type)
                .ok_or(KeyScriptError::InvalidKey { key: c, pos }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_vowels_and_controls() {
        let events = parse_keys("ai <u !").unwrap();
        assert_eq!(
            events,
            [
                SessionEvent::Type(Vowel::A),
                SessionEvent::Type(Vowel::I),
                SessionEvent::Backspace,
                SessionEvent::Type(Vowel::U),
                SessionEvent::GiveUp,
            ]
        );
    }

    #[test]
    fn empty_script() {
        assert!(parse_keys("").unwrap().is_empty());
    }

    #[test]
    fn query_input_must_be_vowels() {
        assert_eq!(
            parse_vowels("aie").unwrap(),
            [Vowel::A, Vowel::I, Vowel::E]
        );
        assert!(parse_vowels("").unwrap().is_empty());
        assert_eq!(
            parse_vowels("kxa").unwrap_err(),
            KeyScriptError::InvalidVowel { key: 'k', pos: 0 }
        );
        // controls belong to replay scripts, not queries
        assert!(parse_vowels("a<").is_err());
        assert!(parse_vowels("a i").is_err());
    }

    #[test]
    fn kana_labels() {
        assert_eq!(kana_label("aui"), "あうい");
        assert_eq!(kana_label(""), "");
    }

    #[test]
    fn rejects_consonants() {
        let err = parse_keys("aka").unwrap_err();
        assert_eq!(err, KeyScriptError::InvalidKey { key: 'k', pos: 1 });
        assert!(err.to_string().contains("'k'"));
    }
}
