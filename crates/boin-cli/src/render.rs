//! Plain-text tables for terminal output.
//!
//! Native text is mostly full-width, so columns are padded by display width
//! rather than by `char` count.

use std::fmt::Write;

use boin_core::{Candidate, Tier};
use unicode_width::UnicodeWidthStr;

fn tier_label(tier: Tier) -> &'static str {
    match tier {
        Tier::Exact => "exact",
        Tier::SameLength => "same-length",
        Tier::LongVowelNear => "long-vowel",
        Tier::Partial => "partial",
    }
}

/// Left-align `s` in a column `width` cells wide.
pub fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{s}{}", " ".repeat(width.saturating_sub(w)))
}

pub fn render_candidates(cands: &[Candidate]) -> String {
    let native_w = cands
        .iter()
        .map(|c| UnicodeWidthStr::width(c.native.as_str()))
        .max()
        .unwrap_or(0)
        .max("native".len());
    let romaji_w = cands
        .iter()
        .map(|c| c.romaji.len())
        .max()
        .unwrap_or(0)
        .max("romaji".len());
    let skel_w = cands
        .iter()
        .map(|c| c.skeleton.len())
        .max()
        .unwrap_or(0)
        .max("skeleton".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>2}  {}  {}  {}  rank",
        "#",
        pad("native", native_w),
        pad("romaji", romaji_w),
        pad("skeleton", skel_w),
    );
    for (i, c) in cands.iter().enumerate() {
        let _ = writeln!(
            out,
            "{i:>2}  {}  {}  {}  {} +{}",
            pad(&c.native, native_w),
            pad(&c.romaji, romaji_w),
            pad(&c.skeleton, skel_w),
            tier_label(c.rank.tier),
            c.rank.distance,
        );
    }
    out
}
