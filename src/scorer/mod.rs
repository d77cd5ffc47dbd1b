pub mod counters;
pub mod ranges;

pub use self::counters::{count_accidentals, count_out_of_bounds, count_out_of_range_keys};
pub use self::ranges::{score_known_ranges, score_ranges};

use crate::consts::OOB_MARKER;
use crate::transposer::{KeyRange, Transposer};
use serde::Serialize;

/// Notes that are awkward to play after a transposition.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badness {
    pub accidentals: usize,
    pub out_of_bounds: usize,
}

impl Badness {
    pub fn total(&self) -> usize {
        self.accidentals + self.out_of_bounds
    }

    /// Scores text that has already been transposed under the Mark policy.
    pub fn of_marked(transposed: &str) -> Self {
        Self {
            accidentals: count_accidentals(transposed),
            out_of_bounds: count_out_of_bounds(transposed, OOB_MARKER),
        }
    }
}

/// Transposes `text` under Mark within `range` and scores the result.
/// Independent of whatever policy the caller uses for output.
pub fn score(text: &str, offset: i32, range: KeyRange) -> Badness {
    Badness::of_marked(&Transposer::marking(range).transpose(text, offset))
}
