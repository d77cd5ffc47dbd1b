use crate::consts::MAX_KEY;
use crate::error::{VpError, VpResult};
use crate::scorer;
use crate::search::{self, SearchResult};
use crate::transposer::{KeyRange, OobPolicy, Transposer};
use serde::Deserialize;

/// Parses an offset as typed by a user. Integers are taken as-is; a decimal
/// fraction is truncated toward zero. Anything else is rejected.
pub fn parse_offset(raw: &str) -> VpResult<i32> {
    let trimmed = raw.trim();
    let invalid = || VpError::InvalidOffset(raw.to_string());

    let (whole, fraction) = match trimmed.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (trimmed, None),
    };
    if let Some(f) = fraction {
        if !f.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
    }
    let digits = whole.strip_prefix(&['+', '-'][..]).unwrap_or(whole);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    whole.parse::<i32>().map_err(|_| invalid())
}

/// Manual transposition from raw inputs.
pub fn transpose(
    text: &str,
    raw_offset: &str,
    min_key: Option<i64>,
    max_key: Option<i64>,
    policy: OobPolicy,
) -> VpResult<String> {
    let offset = parse_offset(raw_offset)?;
    let range = KeyRange::new(min_key.unwrap_or(0), max_key.unwrap_or(MAX_KEY as i64))?;
    Ok(Transposer::new(range, policy)?.transpose(text, offset))
}

pub fn find_best_offsets(text: &str) -> SearchResult {
    search::find_best_offsets(text)
}

pub fn score_ranges(text: &str) -> [usize; 3] {
    scorer::score_ranges(text)
}

/// A transposition request as handed over by a front end.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransposeRequest {
    pub text: String,
    pub offset: i32,
    #[serde(default)]
    pub min_key: i64,
    #[serde(default = "default_max_key")]
    pub max_key: i64,
    #[serde(default)]
    pub policy: OobPolicy,
}

fn default_max_key() -> i64 {
    MAX_KEY as i64
}

impl TransposeRequest {
    pub fn run(&self) -> VpResult<String> {
        let range = KeyRange::new(self.min_key, self.max_key)?;
        Ok(Transposer::new(range, self.policy)?.transpose(&self.text, self.offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_offset_accepts() {
        assert_eq!(parse_offset("3").unwrap(), 3);
        assert_eq!(parse_offset(" -12 ").unwrap(), -12);
        assert_eq!(parse_offset("+4").unwrap(), 4);
        assert_eq!(parse_offset("2.9").unwrap(), 2);
        assert_eq!(parse_offset("-2.9").unwrap(), -2);
        assert_eq!(parse_offset("7.").unwrap(), 7);
    }

    #[test]
    fn test_parse_offset_rejects() {
        for raw in ["", "abc", "2x", "--1", ".5", "1.2.3", "1e3", "99999999999", "-"] {
            assert!(
                matches!(parse_offset(raw), Err(VpError::InvalidOffset(_))),
                "{:?} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_request_defaults() {
        let req: TransposeRequest = serde_json::from_str(r#"{"text":"1","offset":-1}"#).unwrap();
        assert_eq!(req.max_key, 60);
        assert_eq!(req.policy, OobPolicy::Mark);
        assert_eq!(req.run().unwrap(), "?");

        let req: TransposeRequest =
            serde_json::from_str(r#"{"text":"1","offset":-1,"policy":"wrap"}"#).unwrap();
        assert_eq!(req.run().unwrap(), "7");
    }
}
