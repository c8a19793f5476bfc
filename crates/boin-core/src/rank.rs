//! Relevance ordering for matched entries.

use serde::Serialize;

use crate::dict::DictEntry;

/// Priority bucket; lower sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Skeleton equals the input.
    Exact = 0,
    /// Same number of morae, differing only where `u` stood in for a nasal.
    SameLength = 1,
    /// Long-vowel word one mora longer or shorter than the input.
    LongVowelNear = 2,
    /// Any other match, typically a prefix.
    Partial = 3,
}

/// Sort key: tier first, then distance between skeleton and input lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RankKey {
    pub tier: Tier,
    pub distance: usize,
}

pub fn rank_key(entry: &DictEntry, input: &str) -> RankKey {
    let wl = entry.skeleton().chars().count();
    let il = input.chars().count();
    let distance = wl.abs_diff(il);

    let tier = if entry.skeleton() == input {
        Tier::Exact
    } else if wl == il {
        Tier::SameLength
    } else if entry.is_long_vowel() && distance == 1 {
        Tier::LongVowelNear
    } else {
        Tier::Partial
    };

    RankKey { tier, distance }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers() {
        let exact = DictEntry::new("kai", "貝");
        assert_eq!(rank_key(&exact, "ai").tier, Tier::Exact);

        let nasal = DictEntry::new("kann", "缶");
        assert_eq!(nasal.skeleton(), "au");
        assert_eq!(rank_key(&nasal, "au").tier, Tier::Exact);

        let long = DictEntry::new("ka-ki", "カーキ");
        assert_eq!(rank_key(&long, "aa").tier, Tier::LongVowelNear);
        assert_eq!(rank_key(&long, "aaio").tier, Tier::LongVowelNear);

        let plain = DictEntry::new("kaiko", "蚕");
        assert_eq!(plain.skeleton(), "aio");
        assert_eq!(
            rank_key(&plain, "ai"),
            RankKey {
                tier: Tier::Partial,
                distance: 1
            }
        );

        let longer = DictEntry::new("kaikoku", "開国");
        assert_eq!(longer.skeleton(), "aiou");
        assert_eq!(
            rank_key(&longer, "ai"),
            RankKey {
                tier: Tier::Partial,
                distance: 2
            }
        );
        assert!(rank_key(&plain, "ai") < rank_key(&longer, "ai"));
    }

    #[test]
    fn same_length_without_equality() {
        let entry = DictEntry::with_skeleton("an", "案", "an");
        assert_eq!(
            rank_key(&entry, "au"),
            RankKey {
                tier: Tier::SameLength,
                distance: 0
            }
        );
    }

    #[test]
    fn ordering_is_tier_then_distance() {
        let a = RankKey {
            tier: Tier::Exact,
            distance: 9,
        };
        let b = RankKey {
            tier: Tier::SameLength,
            distance: 0,
        };
        let c = RankKey {
            tier: Tier::Partial,
            distance: 1,
        };
        let d = RankKey {
            tier: Tier::Partial,
            distance: 3,
        };
        assert!(a < b && b < c && c < d);
    }
}
