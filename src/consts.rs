/// The keyboard alphabet, lowest key first.
pub const VP_CHARS: &str = "1!2@34$5%6^78*9(0qQwWeErtTyYuiIoOpPasSdDfgGhHjJklLzZxcCvVbBnm";

/// Black keys (sharps/flats) of the alphabet.
pub const ACCIDENTALS: &str = "!@$%^*(QWETYIOPSDGHJLZCVB";

/// Number of keys on the keyboard (positions 0..=60).
pub const KEY_COUNT: usize = 61;

/// Highest keyboard position.
pub const MAX_KEY: usize = KEY_COUNT - 1;

/// Semitones per octave.
pub const OCTAVE: i64 = 12;

/// Emitted in place of a note under the Mark policy.
pub const OOB_MARKER: char = '?';

/// Value used in the ASCII lookup table for "Key Not Found".
pub const KEY_NOT_FOUND_U8: u8 = 255;

/// Default auto-transpose window (one octave down to one octave up).
pub const DEFAULT_WINDOW_MIN: i32 = -12;
pub const DEFAULT_WINDOW_MAX: i32 = 12;
