use crate::consts::{MAX_KEY, OCTAVE, OOB_MARKER};
use crate::error::{VpError, VpResult};
use crate::keymap;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// How a note is handled once its shifted position leaves the key range.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize, EnumIter, Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum OobPolicy {
    /// Move the note by whole octaves until it fits.
    Wrap,
    /// Emit `?` in place of the note.
    #[default]
    Mark,
    /// Remove the note.
    Drop,
    /// Reserved for octave-switch notation. Currently emits nothing.
    OctaveSwitch,
}

/// Inclusive range of playable keyboard positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyRange {
    min: usize,
    max: usize,
}

impl Default for KeyRange {
    fn default() -> Self {
        Self::FULL
    }
}

impl KeyRange {
    pub const FULL: KeyRange = KeyRange { min: 0, max: MAX_KEY };

    pub fn new(min: i64, max: i64) -> VpResult<Self> {
        if min < 0 || max > MAX_KEY as i64 || min > max {
            return Err(VpError::InvalidRange { min, max });
        }
        Ok(Self {
            min: min as usize,
            max: max as usize,
        })
    }

    /// Caller guarantees `min <= max <= MAX_KEY`.
    pub(crate) const fn new_unchecked(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn contains(&self, position: i64) -> bool {
        position >= self.min as i64 && position <= self.max as i64
    }

    /// Wrapping needs a full octave to land in.
    pub fn spans_octave(&self) -> bool {
        (self.max - self.min) as i64 >= OCTAVE - 1
    }

    /// Shift `position` by whole octaves until it lies in the range.
    /// Only meaningful when `spans_octave()` holds.
    fn wrap(&self, position: i64) -> i64 {
        let (min, max) = (self.min as i64, self.max as i64);
        let mut p = position;
        if p > max {
            p -= OCTAVE * (p - max + OCTAVE - 1).div_euclid(OCTAVE);
        }
        if p < min {
            p += OCTAVE * (min - p + OCTAVE - 1).div_euclid(OCTAVE);
        }
        p
    }
}

/// Splits text into lines on `\n`, accepting `\r\n`. A text ending in a
/// separator yields a trailing empty line, so joining with `\n` restores
/// the line count.
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    let mut segments = text.split('\n').peekable();
    std::iter::from_fn(move || {
        let segment = segments.next()?;
        if segments.peek().is_some() {
            Some(segment.strip_suffix('\r').unwrap_or(segment))
        } else {
            Some(segment)
        }
    })
}

/// Shifts keys by a number of semitones within a key range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transposer {
    range: KeyRange,
    policy: OobPolicy,
}

impl Transposer {
    pub fn new(range: KeyRange, policy: OobPolicy) -> VpResult<Self> {
        if policy == OobPolicy::Wrap && !range.spans_octave() {
            return Err(VpError::WrapRangeTooNarrow {
                min: range.min,
                max: range.max,
            });
        }
        Ok(Self { range, policy })
    }

    /// Full keyboard; always valid for every policy.
    pub fn full(policy: OobPolicy) -> Self {
        Self {
            range: KeyRange::FULL,
            policy,
        }
    }

    /// Mark never loops, so every range is valid.
    pub fn marking(range: KeyRange) -> Self {
        Self {
            range,
            policy: OobPolicy::Mark,
        }
    }

    pub fn range(&self) -> KeyRange {
        self.range
    }

    pub fn policy(&self) -> OobPolicy {
        self.policy
    }

    pub fn transpose(&self, text: &str, offset: i32) -> String {
        let mut out = String::with_capacity(text.len());
        for (i, line) in lines(text).enumerate() {
            if i > 0 {
                out.push('\n');
            }
            self.transpose_line_into(line, offset, &mut out);
        }
        out
    }

    /// Transposes a single line (no separators expected) onto `out`.
    pub fn transpose_line_into(&self, line: &str, offset: i32, out: &mut String) {
        for c in line.chars() {
            match keymap::position_of(c) {
                Some(pos) => self.push_shifted(pos, offset, out),
                None => out.push(c),
            }
        }
    }

    fn push_shifted(&self, position: usize, offset: i32, out: &mut String) {
        let shifted = position as i64 + offset as i64;
        if self.range.contains(shifted) {
            out.extend(keymap::char_at(shifted as usize));
            return;
        }
        match self.policy {
            OobPolicy::Wrap => {
                let wrapped = self.range.wrap(shifted);
                out.extend(usize::try_from(wrapped).ok().and_then(keymap::char_at));
            }
            OobPolicy::Mark => out.push(OOB_MARKER),
            OobPolicy::Drop | OobPolicy::OctaveSwitch => {}
        }
    }
}

/// One-shot transpose with an explicit range and policy.
pub fn transpose(text: &str, offset: i32, range: KeyRange, policy: OobPolicy) -> VpResult<String> {
    Ok(Transposer::new(range, policy)?.transpose(text, offset))
}
