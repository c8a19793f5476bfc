
use std::sync::Arc;

use boin_core::{Vowel, VowelDictionary};

use super::VowelSession;

pub(super) fn make_test_dict() -> Arc<VowelDictionary> {
    Arc::new(VowelDictionary::from_pairs([
        ("isogashii", "忙しい"),
        ("itai", "いたい"),
        ("nemui", "ねむい"),
        ("sukkiri", "すっきり"),
        ("tsurai", "つらい"),
        ("gennki", "元気"),
        ("menndou", "めんどう"),
        ("atsui", "あつい"),
        ("darui", "だるい"),
        ("samui", "さむい"),
    ]))
}

/// Type each vowel of `s`. Non-vowel characters are ignored.
pub(super) fn type_str(session: &mut VowelSession, s: &str) {
    for v in s.chars().filter_map(Vowel::from_char) {
        session.type_vowel(v);
    }
}
