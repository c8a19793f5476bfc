//! Vowel alphabet and skeleton extraction.
//!
//! Consonants carry no information once the vowel sequence is known, but a
//! doubled `n` (ん) and the long-vowel mark `-` (ー) each occupy a mora of
//! their own and are folded into vowel-equivalent symbols:
//!
//! - a run of `n` contributes one `u` per pair (`n` → nothing, `nn` → `u`,
//!   `nnn` → `u`, `nnnn` → `uu`)
//! - `-` repeats the last symbol emitted so far

use std::fmt;

/// Long-vowel marker (chōon).
pub const LONG_VOWEL_MARK: char = '-';

/// One of the five symbols a user can type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vowel {
    A,
    I,
    U,
    E,
    O,
}

impl Vowel {
    pub const ALL: [Vowel; 5] = [Vowel::A, Vowel::I, Vowel::U, Vowel::E, Vowel::O];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a' => Some(Self::A),
            'i' => Some(Self::I),
            'u' => Some(Self::U),
            'e' => Some(Self::E),
            'o' => Some(Self::O),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::A => 'a',
            Self::I => 'i',
            Self::U => 'u',
            Self::E => 'e',
            Self::O => 'o',
        }
    }

    /// The hiragana shown on the input key (あ い う え お).
    pub fn kana(self) -> char {
        match self {
            Self::A => 'あ',
            Self::I => 'い',
            Self::U => 'う',
            Self::E => 'え',
            Self::O => 'お',
        }
    }
}

impl TryFrom<char> for Vowel {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c).ok_or(c)
    }
}

impl fmt::Display for Vowel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

pub fn is_vowel(c: char) -> bool {
    Vowel::from_char(c).is_some()
}

/// Whether `romaji` contains the long-vowel marker.
pub fn is_long_vowel_word(romaji: &str) -> bool {
    romaji.contains(LONG_VOWEL_MARK)
}

/// Reduce a romaji word to its vowel skeleton.
///
/// Single left-to-right pass, no backtracking. The result only ever contains
/// `a`, `i`, `u`, `e` and `o`.
pub fn extract_vowels(romaji: &str) -> String {
    let chars: Vec<char> = romaji.chars().collect();
    let mut out = String::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == 'n' {
            let run = chars[i..].iter().take_while(|&&c| c == 'n').count();
            for _ in 0..run / 2 {
                out.push('u');
            }
            i += run;
            continue;
        }
        if c == LONG_VOWEL_MARK {
            if let Some(last) = out.chars().last() {
                out.push(last);
            }
        } else if is_vowel(c) {
            out.push(c);
        }
        i += 1;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn plain_words() {
        assert_eq!(extract_vowels("amai"), "aai");
        assert_eq!(extract_vowels("karai"), "aai");
        assert_eq!(extract_vowels("shoppai"), "oai");
        assert_eq!(extract_vowels(""), "");
    }

    #[test]
    fn nasal_runs() {
        assert_eq!(extract_vowels("n"), "");
        assert_eq!(extract_vowels("nn"), "u");
        assert_eq!(extract_vowels("nnn"), "u");
        assert_eq!(extract_vowels("nnnn"), "uu");
        // な: the single n is a consonant onset
        assert_eq!(extract_vowels("nemui"), "eui");
        assert_eq!(extract_vowels("gennki"), "eui");
    }

    #[test]
    fn long_vowel_mark() {
        assert_eq!(extract_vowels("a-"), "aa");
        assert_eq!(extract_vowels("ka-ki"), "aai");
        assert_eq!(extract_vowels("pa-fekuto"), "aaeuo");
        assert_eq!(extract_vowels("a--"), "aaa");
    }

    #[test]
    fn long_vowel_mark_without_preceding_vowel() {
        assert_eq!(extract_vowels("-"), "");
        assert_eq!(extract_vowels("-a"), "a");
        assert_eq!(extract_vowels("k-a"), "a");
    }

    #[test]
    fn long_vowel_mark_after_nasal() {
        assert_eq!(extract_vowels("nn-"), "uu");
        assert_eq!(extract_vowels("ra-menn"), "aaeu");
    }

    #[test]
    fn vowel_round_trip() {
        for v in Vowel::ALL {
            assert_eq!(Vowel::from_char(v.as_char()), Some(v));
            assert_eq!(Vowel::try_from(v.as_char()), Ok(v));
        }
        assert_eq!(Vowel::try_from('k'), Err('k'));
        assert_eq!(Vowel::U.to_string(), "u");
        assert_eq!(Vowel::O.kana(), 'お');
    }

    #[test]
    fn long_vowel_detection() {
        assert!(is_long_vowel_word("ra-menn"));
        assert!(!is_long_vowel_word("ramen"));
    }

    proptest! {
        #[test]
        fn consonants_only_yield_empty(s in "[bcdfghjklmpqrstvwxyz]{0,16}") {
            prop_assert_eq!(extract_vowels(&s), "");
        }

        #[test]
        fn skeleton_uses_vowel_alphabet(s in "[a-z-]{0,24}") {
            prop_assert!(extract_vowels(&s).chars().all(is_vowel));
        }
    }
}
