use super::{score, Badness};
use crate::ranges::{get_all_ranges, KnownRange};

/// Badness of the sheet kept at pitch but squeezed into each compression
/// window, in `1-s`, `8-l`, `t-m` order.
pub fn score_ranges(text: &str) -> [usize; 3] {
    let mut totals = [0; 3];
    for (known, badness) in score_known_ranges(text) {
        totals[known.index()] = badness.total();
    }
    totals
}

pub fn score_known_ranges(text: &str) -> Vec<(KnownRange, Badness)> {
    get_all_ranges()
        .into_iter()
        .map(|(known, range)| (known, score(text, 0, range)))
        .collect()
}
