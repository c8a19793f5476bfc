//! Ranked candidate lookup for a typed vowel sequence.

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::dict::{DictEntry, VowelDictionary};
use crate::matcher::matches;
use crate::rank::{rank_key, RankKey};
use crate::settings::settings;

/// A matched dictionary entry with its sort key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub native: String,
    pub romaji: String,
    pub skeleton: String,
    pub rank: RankKey,
}

impl Candidate {
    fn new(entry: &DictEntry, rank: RankKey) -> Self {
        Self {
            native: entry.native.clone(),
            romaji: entry.romaji.clone(),
            skeleton: entry.skeleton().to_owned(),
            rank,
        }
    }
}

/// Return at most `max_results` entries matching `input`, best first.
///
/// Empty input returns nothing without scanning. The sort is stable, so
/// entries with equal keys keep dictionary order.
pub fn query(dict: &VowelDictionary, input: &str, max_results: usize) -> Vec<Candidate> {
    let _span = debug_span!("query", input, max_results).entered();
    if input.is_empty() {
        return Vec::new();
    }

    let mut matched: Vec<(RankKey, &DictEntry)> = dict
        .iter()
        .filter(|e| matches(e.skeleton(), input, &e.romaji))
        .map(|e| (rank_key(e, input), e))
        .collect();
    let match_count = matched.len();

    matched.sort_by_key(|(rank, _)| *rank);
    matched.truncate(max_results);

    debug!(match_count, returned = matched.len());
    matched
        .into_iter()
        .map(|(rank, e)| Candidate::new(e, rank))
        .collect()
}

/// [`query`] capped at `candidates.max_results` from the global settings.
pub fn query_with_settings(dict: &VowelDictionary, input: &str) -> Vec<Candidate> {
    query(dict, input, settings().candidates.max_results)
}

impl VowelDictionary {
    pub fn query(&self, input: &str, max_results: usize) -> Vec<Candidate> {
        query(self, input, max_results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::Tier;

    fn natives(cands: &[Candidate]) -> Vec<&str> {
        cands.iter().map(|c| c.native.as_str()).collect()
    }

    fn taste_dict() -> VowelDictionary {
        VowelDictionary::from_pairs([
            ("amai", "甘い"),
            ("karai", "辛い"),
            ("suppai", "酸っぱい"),
            ("shoppai", "しょっぱい"),
            ("nigai", "苦い"),
            ("umai", "うまい"),
            ("amazuppai", "甘酸っぱい"),
            ("assari", "あっさり"),
            ("pa-fekuto", "パーフェクト"),
            ("ra-menn", "ラーメン"),
        ])
    }

    #[test]
    fn empty_input_returns_nothing() {
        assert!(query(&taste_dict(), "", 6).is_empty());
    }

    #[test]
    fn exact_matches_first_in_dictionary_order() {
        let dict = taste_dict();
        let got = query(&dict, "aai", 6);
        assert_eq!(natives(&got), ["甘い", "辛い", "あっさり"]);
        assert!(got.iter().all(|c| c.rank.tier == Tier::Exact));
    }

    #[test]
    fn exact_before_longer() {
        let dict = VowelDictionary::from_pairs([("aiu", "長い方"), ("ai", "愛")]);
        let got = query(&dict, "ai", 6);
        assert_eq!(natives(&got), ["愛", "長い方"]);
        assert_eq!(got[0].rank.tier, Tier::Exact);
        assert_eq!(got[1].rank.tier, Tier::Partial);
    }

    #[test]
    fn prefix_results_prefer_closer_length() {
        let dict = taste_dict();
        let got = query(&dict, "aa", 6);
        // amai/karai/assari are one longer, amazuppai three longer;
        // ra-menn (aaeu) is a long-vowel word two morae off, outside its window
        assert_eq!(natives(&got), ["甘い", "辛い", "あっさり", "甘酸っぱい"]);
    }

    #[test]
    fn long_vowel_word_tolerates_missing_mora() {
        let dict = taste_dict();
        let got = query(&dict, "aeuo", 6);
        assert!(got.is_empty(), "skeleton aaeuo must not match aeuo");

        let got = query(&dict, "aaeu", 6);
        assert_eq!(natives(&got), ["ラーメン", "パーフェクト"]);
        assert_eq!(got[0].rank.tier, Tier::Exact);
        assert_eq!(got[1].rank.tier, Tier::LongVowelNear);
    }

    #[test]
    fn nasal_typed_as_u() {
        let dict = VowelDictionary::from_pairs([("gennki", "元気"), ("nemui", "ねむい")]);
        let got = query(&dict, "eui", 6);
        assert_eq!(natives(&got), ["元気", "ねむい"]);
    }

    #[test]
    fn caps_to_best_entries() {
        let mut pairs: Vec<(String, String)> = (0..14)
            .map(|i| (format!("kakaka{i}"), format!("long{i}")))
            .collect();
        pairs.extend((0..6).map(|i| (format!("ka{i}"), format!("short{i}"))));
        let dict = VowelDictionary::from_pairs(pairs);

        let got = query(&dict, "a", 6);
        assert_eq!(got.len(), 6);
        assert!(got.iter().all(|c| c.native.starts_with("short")));
        assert_eq!(query(&dict, "a", 100).len(), 20);
    }

    #[test]
    fn repeated_query_is_identical() {
        let dict = taste_dict();
        assert_eq!(query(&dict, "ua", 12), query(&dict, "ua", 12));
    }

    #[test]
    fn no_match_is_empty_not_error() {
        assert!(query(&taste_dict(), "ooooo", 6).is_empty());
    }

    #[test]
    fn method_form_and_settings_cap() {
        let dict = taste_dict();
        assert_eq!(dict.query("a", 2).len(), 2);
        assert!(query_with_settings(&dict, "a").len() <= settings().candidates.max_results);
    }
}
