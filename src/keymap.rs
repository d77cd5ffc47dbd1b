use crate::consts::{ACCIDENTALS, KEY_COUNT, KEY_NOT_FOUND_U8, VP_CHARS};

/// ASCII -> keyboard position. Every non-key byte holds `KEY_NOT_FOUND_U8`.
static POSITIONS: [u8; 128] = build_position_table();

/// ASCII -> black key flag.
static ACCIDENTAL_MASK: [bool; 128] = build_accidental_mask();

const fn build_position_table() -> [u8; 128] {
    let mut table = [KEY_NOT_FOUND_U8; 128];
    let bytes = VP_CHARS.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        table[bytes[i] as usize] = i as u8;
        i += 1;
    }
    table
}

const fn build_accidental_mask() -> [bool; 128] {
    let mut mask = [false; 128];
    let bytes = ACCIDENTALS.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        mask[bytes[i] as usize] = true;
        i += 1;
    }
    mask
}

/// Keyboard position of `c`, or `None` when the character is not a key.
pub fn position_of(c: char) -> Option<usize> {
    if !c.is_ascii() {
        return None;
    }
    match POSITIONS[c as usize] {
        KEY_NOT_FOUND_U8 => None,
        pos => Some(pos as usize),
    }
}

/// Character for a keyboard position. Defined for 0..=60 only.
pub fn char_at(position: usize) -> Option<char> {
    if position < KEY_COUNT {
        Some(VP_CHARS.as_bytes()[position] as char)
    } else {
        None
    }
}

pub fn is_accidental(c: char) -> bool {
    c.is_ascii() && ACCIDENTAL_MASK[c as usize]
}
