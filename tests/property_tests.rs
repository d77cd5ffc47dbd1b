use proptest::prelude::*;
use vptranspose::consts::VP_CHARS;
use vptranspose::keymap;
use vptranspose::transposer::{OobPolicy, Transposer};

// --- STRATEGIES ---

fn arb_policy() -> impl Strategy<Value = OobPolicy> {
    prop_oneof![
        Just(OobPolicy::Wrap),
        Just(OobPolicy::Mark),
        Just(OobPolicy::Drop),
        Just(OobPolicy::OctaveSwitch),
    ]
}

fn arb_key() -> impl Strategy<Value = char> {
    (0..VP_CHARS.len()).prop_map(|i| VP_CHARS.as_bytes()[i] as char)
}

// Sheets made of keys only, with spaces and line breaks.
fn arb_sheet() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            8 => arb_key().prop_map(String::from),
            1 => Just(" ".to_string()),
            1 => Just("\n".to_string()),
        ],
        0..80,
    )
    .prop_map(|parts| parts.concat())
}

fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn test_zero_offset_is_identity(sheet in arb_sheet(), policy in arb_policy()) {
        let out = Transposer::full(policy).transpose(&sheet, 0);
        prop_assert_eq!(out, sheet);
    }

    #[test]
    fn test_line_count_preserved(
        text in "(?s).{0,120}",
        offset in -200i32..200,
        policy in arb_policy()
    ) {
        let out = Transposer::full(policy).transpose(&text, offset);
        prop_assert_eq!(line_count(&out), line_count(&text));
    }

    #[test]
    fn test_unmapped_chars_pass_through(
        text in "[AFKMNRUX \\[\\]|/.,-]{0,60}",
        offset in -60i32..60,
        policy in arb_policy()
    ) {
        let out = Transposer::full(policy).transpose(&text, offset);
        prop_assert_eq!(out, text);
    }

    #[test]
    fn test_wrap_round_trip_without_wrapping(raw in arb_sheet(), k in -12i32..=12) {
        // Only keys whose shift stays on the keyboard take part.
        let sheet: String = raw
            .chars()
            .filter(|&c| match keymap::position_of(c) {
                Some(p) => (0..=60).contains(&(p as i32 + k)),
                None => true,
            })
            .collect();

        let t = Transposer::full(OobPolicy::Wrap);
        let there = t.transpose(&sheet, k);
        prop_assert_eq!(t.transpose(&there, -k), sheet);
    }

    #[test]
    fn test_mark_keeps_char_count(sheet in arb_sheet(), offset in -30i32..30) {
        let out = Transposer::full(OobPolicy::Mark).transpose(&sheet, offset);
        prop_assert_eq!(out.chars().count(), sheet.chars().count());
    }
}
