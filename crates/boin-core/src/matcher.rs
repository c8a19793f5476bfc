//! Decide whether typed vowels plausibly denote a dictionary word.

use crate::vowel::is_long_vowel_word;

/// Match typed `input` against a word's `skeleton`.
///
/// - Empty input matches nothing.
/// - Long-vowel words (romaji contains `-`) tolerate a length difference of
///   one in either direction; the common prefix is compared.
/// - Other words accept any prefix of the skeleton.
/// - A typed `u` also accepts a skeleton `n`, since users type `u` for ん.
pub fn matches(skeleton: &str, input: &str, romaji: &str) -> bool {
    if input.is_empty() {
        return false;
    }

    let wl = skeleton.chars().count();
    let il = input.chars().count();

    let compare_len = if is_long_vowel_word(romaji) {
        if wl.abs_diff(il) > 1 {
            return false;
        }
        wl.min(il)
    } else {
        if il > wl {
            return false;
        }
        il
    };

    skeleton
        .chars()
        .zip(input.chars())
        .take(compare_len)
        .all(|(w, i)| symbol_matches(w, i))
}

fn symbol_matches(word: char, typed: char) -> bool {
    if typed == 'u' {
        word == 'u' || word == 'n'
    } else {
        word == typed
    }
}
