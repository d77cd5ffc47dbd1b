use crate::consts::OCTAVE;
use crate::transposer::KeyRange;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Three-octave windows a sheet can be compressed into. Each is named
/// after the keys at its bounds.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
pub enum KnownRange {
    #[strum(serialize = "1-s")]
    Low,
    #[strum(serialize = "8-l")]
    Middle,
    #[strum(serialize = "t-m")]
    High,
}

/// Width of a compression window, in keyboard positions.
const RANGE_SPAN: usize = 36;

impl KnownRange {
    pub fn index(&self) -> usize {
        match self {
            Self::Low => 0,
            Self::Middle => 1,
            Self::High => 2,
        }
    }

    // [0,36], [12,48], [24,60]
    pub fn key_range(&self) -> KeyRange {
        let min = self.index() * OCTAVE as usize;
        KeyRange::new_unchecked(min, min + RANGE_SPAN)
    }
}

pub fn get_all_ranges() -> Vec<(KnownRange, KeyRange)> {
    KnownRange::iter().map(|r| (r, r.key_range())).collect()
}
