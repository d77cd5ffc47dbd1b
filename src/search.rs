use crate::consts::{DEFAULT_WINDOW_MAX, DEFAULT_WINDOW_MIN};
use crate::error::{VpError, VpResult};
use crate::scorer::{self, Badness};
use crate::transposer::KeyRange;
use serde::Serialize;
use tracing::debug;

/// Inclusive range of candidate offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchWindow {
    min: i32,
    max: i32,
}

impl Default for SearchWindow {
    fn default() -> Self {
        Self {
            min: DEFAULT_WINDOW_MIN,
            max: DEFAULT_WINDOW_MAX,
        }
    }
}

impl SearchWindow {
    pub fn new(min: i32, max: i32) -> VpResult<Self> {
        if min > max {
            return Err(VpError::InvalidWindow { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn offsets(&self) -> impl Iterator<Item = i32> {
        self.min..=self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub offset: i32,
    pub badness: Badness,
}

/// All offsets sharing the lowest badness, ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub offsets: Vec<i32>,
    pub badness: usize,
}

impl SearchResult {
    /// 0 is among the best offsets.
    pub fn is_already_best(&self) -> bool {
        self.offsets.contains(&0)
    }

    /// Offset to apply: stay put when already optimal, else the lowest tie.
    pub fn preferred(&self) -> i32 {
        if self.is_already_best() {
            0
        } else {
            self.offsets.first().copied().unwrap_or(0)
        }
    }
}

/// Scores every offset of the window on the full keyboard.
pub fn evaluate_window(text: &str, window: SearchWindow) -> Vec<Candidate> {
    window
        .offsets()
        .map(|offset| {
            let badness = scorer::score(text, offset, KeyRange::FULL);
            debug!(
                "offset {:+3} | accidentals {:4} | out of range {:4}",
                offset, badness.accidentals, badness.out_of_bounds
            );
            Candidate { offset, badness }
        })
        .collect()
}

/// Exhaustive scan over the default one-octave window (-12..=12).
pub fn find_best_offsets(text: &str) -> SearchResult {
    find_best_offsets_in(text, SearchWindow::default())
}

pub fn find_best_offsets_in(text: &str, window: SearchWindow) -> SearchResult {
    best_of(&evaluate_window(text, window))
}

/// Collects the minimal-badness candidates. Ties are kept in input order.
pub fn best_of(candidates: &[Candidate]) -> SearchResult {
    let mut best = usize::MAX;
    let mut offsets = Vec::new();

    for c in candidates {
        let total = c.badness.total();
        if total < best {
            best = total;
            offsets.clear();
            offsets.push(c.offset);
        } else if total == best {
            offsets.push(c.offset);
        }
    }

    SearchResult {
        offsets,
        badness: if best == usize::MAX { 0 } else { best },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_validation() {
        assert!(SearchWindow::new(3, 3).is_ok());
        assert!(matches!(
            SearchWindow::new(4, -4),
            Err(VpError::InvalidWindow { min: 4, max: -4 })
        ));
        assert_eq!(SearchWindow::default().offsets().count(), 25);
    }

    #[test]
    fn test_preferred() {
        let r = SearchResult {
            offsets: vec![-3, 0, 5],
            badness: 1,
        };
        assert_eq!(r.preferred(), 0);
        let r = SearchResult {
            offsets: vec![-3, 5],
            badness: 1,
        };
        assert_eq!(r.preferred(), -3);
    }
}
