use crate::keymap;
use crate::transposer::KeyRange;

/// Number of black keys in `text`.
pub fn count_accidentals(text: &str) -> usize {
    text.chars().filter(|&c| keymap::is_accidental(c)).count()
}

/// Number of `marker` characters in `text`. Meant for output of a Mark
/// transpose; a marker already present in the input counts as well.
pub fn count_out_of_bounds(text: &str, marker: char) -> usize {
    text.chars().filter(|&c| c == marker).count()
}

/// Number of keys in `text` that land outside `range` once shifted by
/// `offset`. Characters that are not keys, `?` included, are ignored.
pub fn count_out_of_range_keys(text: &str, offset: i32, range: KeyRange) -> usize {
    text.chars()
        .filter_map(keymap::position_of)
        .filter(|&pos| !range.contains(pos as i64 + offset as i64))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        assert_eq!(count_accidentals("1!2@ qQ"), 3);
        assert_eq!(count_accidentals("hello world"), 0);
        assert_eq!(count_accidentals(""), 0);
        assert_eq!(count_out_of_bounds("?a??", '?'), 3);
        assert_eq!(count_out_of_bounds("abc", '?'), 0);
    }

    #[test]
    fn test_out_of_range_keys_skip_literal_marks() {
        assert_eq!(count_out_of_range_keys("what? m", 1, KeyRange::FULL), 1);
        assert_eq!(count_out_of_range_keys("???", 40, KeyRange::FULL), 0);
        assert_eq!(count_out_of_range_keys("1m", i32::MIN, KeyRange::FULL), 2);

        let mid = KeyRange::new(12, 48).unwrap();
        assert_eq!(count_out_of_range_keys("1s8lm", 0, mid), 2);
    }
}
