use std::path::Path;

use boin_core::settings::settings;
use boin_core::{extract_vowels, query, DuplicatePolicy, VowelDictionary};
use serde::Serialize;

use super::die;
use crate::keys::parse_vowels;
use crate::render::{pad, render_candidates};

pub(crate) fn load(dict_file: &str, policy: DuplicatePolicy) -> VowelDictionary {
    die!(
        VowelDictionary::open(Path::new(dict_file), policy),
        "Error loading {dict_file}: {}"
    )
}

pub fn query_cmd(dict_file: &str, input: &str, n: Option<usize>, json: bool) {
    die!(parse_vowels(input), "Error: {}");
    let dict = load(dict_file, settings().dictionary.on_duplicate);
    let max_results = n.unwrap_or(settings().candidates.max_results);
    let cands = query(&dict, input, max_results);

    if json {
        println!("{}", die!(serde_json::to_string_pretty(&cands), "Error: {}"));
        return;
    }
    if cands.is_empty() {
        println!("(no candidates for {input:?})");
        return;
    }
    print!("{}", render_candidates(&cands));
}

#[derive(Serialize)]
struct Extracted<'a> {
    romaji: &'a str,
    skeleton: String,
    long_vowel: bool,
}

pub fn extract(words: &[String], json: bool) {
    let rows: Vec<Extracted> = words
        .iter()
        .map(|w| Extracted {
            romaji: w,
            skeleton: extract_vowels(w),
            long_vowel: boin_core::vowel::is_long_vowel_word(w),
        })
        .collect();

    if json {
        println!("{}", die!(serde_json::to_string_pretty(&rows), "Error: {}"));
        return;
    }
    let width = rows.iter().map(|r| r.romaji.len()).max().unwrap_or(0);
    for r in &rows {
        let mark = if r.long_vowel { "  (long vowel)" } else { "" };
        println!("{}  {}{mark}", pad(r.romaji, width), r.skeleton);
    }
}

/// Load a dictionary and report its size; `strict` rejects duplicate keys.
pub fn check(dict_file: &str, strict: bool) {
    let policy = if strict {
        DuplicatePolicy::Reject
    } else {
        DuplicatePolicy::Warn
    };
    let dict = load(dict_file, policy);
    let empty = dict.iter().filter(|e| e.skeleton().is_empty()).count();
    let long = dict.iter().filter(|e| e.is_long_vowel()).count();
    println!(
        "OK: {} entries ({long} long-vowel, {empty} with empty skeleton)",
        dict.len()
    );
}
