use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::tier::Tier;

/// FNV-1a 32-bit offset basis
pub const FNV_OFFSET_BASIS: u32 = 0x811c9dc5;

/// FNV-1a 32-bit prime
pub const FNV_PRIME: u32 = 0x01000193;

/// Date format used in seeds and share links
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validated input for a single calculation.
///
/// Names are kept as entered (trimmed); normalization happens while building
/// the seed so history and share links show what the user typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreInput {
    pub name_a: String,
    pub name_b: String,
    pub date_a: Option<NaiveDate>,
    pub date_b: Option<NaiveDate>,
}

impl ScoreInput {
    /// Input with names only (no birthdate bonus)
    pub fn names(name_a: impl Into<String>, name_b: impl Into<String>) -> Self {
        Self {
            name_a: name_a.into(),
            name_b: name_b.into(),
            date_a: None,
            date_b: None,
        }
    }

    pub fn with_dates(mut self, date_a: Option<NaiveDate>, date_b: Option<NaiveDate>) -> Self {
        self.date_a = date_a;
        self.date_b = date_b;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u8,
    pub tier: Tier,
}

/// Lowercase, trim, and collapse whitespace runs to a single space.
pub fn normalize(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// 32-bit FNV-1a over the UTF-16 code units of `text`.
///
/// UTF-16 units match what browsers hash, so scores stay identical for links
/// created by the web version.
pub fn hash32(text: &str) -> u32 {
    text.encode_utf16().fold(FNV_OFFSET_BASIS, |hash, unit| {
        (hash ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    })
}

/// Build the seed string: `nameA|nameB|dateA|dateB`, empty for missing dates.
pub fn seed(input: &ScoreInput) -> String {
    format!(
        "{}|{}|{}|{}",
        normalize(&input.name_a),
        normalize(&input.name_b),
        format_date(input.date_a),
        format_date(input.date_b)
    )
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Birthdate bonus in 0..8. Zero unless both dates are present.
///
/// Day is 1-indexed, month is 0-indexed (January = 0).
pub fn date_bonus(date_a: Option<NaiveDate>, date_b: Option<NaiveDate>) -> u32 {
    match (date_a, date_b) {
        (Some(a), Some(b)) => (a.day() + b.day() + a.month0() + b.month0()) % 8,
        _ => 0,
    }
}

/// Compute the compatibility score for `input`.
pub fn score(input: &ScoreInput) -> ScoreResult {
    let hash = hash32(&seed(input));
    let base = hash % 100 + 1;
    let bonus = date_bonus(input.date_a, input.date_b);
    let score = (base + bonus).min(100) as u8;

    ScoreResult {
        score,
        tier: Tier::from_score(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_hash_empty_is_offset_basis() {
        assert_eq!(hash32(""), 0x811c9dc5);
    }

    #[test]
    fn test_hash_known_vectors() {
        assert_eq!(hash32("a"), 0xe40c292c);
        assert_eq!(hash32("foobar"), 0xbf9cf968);
    }

    #[test]
    fn test_hash_uses_utf16_code_units() {
        // Same values as a charCodeAt loop in a browser
        assert_eq!(hash32("é"), 0x6c0b6c44);
        // Astral character hashes as its surrogate pair
        assert_eq!(hash32("😀"), 0xcb31c4b8);
        // UTF-8 bytes of "é" give 0x1e9de8c1
        assert_ne!(hash32("é"), 0x1e9de8c1);
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  Jane   Doe "), "jane doe");
        assert_eq!(normalize("O'BRIEN\t-\nSMITH"), "o'brien - smith");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_seed_layout() {
        let input = ScoreInput::names("  Jane   Doe ", "John Smith")
            .with_dates(Some(date("1990-05-17")), None);
        assert_eq!(seed(&input), "jane doe|john smith|1990-05-17|");
    }

    #[test]
    fn test_score_without_dates_is_base() {
        // hash32("alice|bob||") = 0x52cdb8f8
        let result = score(&ScoreInput::names("Alice", "Bob"));
        assert_eq!(result.score, 45);
        assert_eq!(result.tier, Tier::Medium);
    }

    #[test]
    fn test_score_is_order_sensitive() {
        let ab = score(&ScoreInput::names("Alice", "Bob"));
        let ba = score(&ScoreInput::names("Bob", "Alice"));
        assert_eq!(ba.score, 53);
        assert_ne!(ab.score, ba.score);
    }

    #[test]
    fn test_score_ignores_case_and_spacing() {
        let a = score(&ScoreInput::names("Jane Doe", "John Smith"));
        let b = score(&ScoreInput::names("  JANE   doe", "john  SMITH "));
        assert_eq!(a, b);
        assert_eq!(a.score, 70);
    }

    #[test]
    fn test_score_with_dates_adds_bonus() {
        // base 46, bonus (17 + 3 + 4 + 11) % 8 = 3
        let input = ScoreInput::names("Jane Doe", "John Smith")
            .with_dates(Some(date("1990-05-17")), Some(date("1988-12-03")));
        assert_eq!(date_bonus(input.date_a, input.date_b), 3);
        assert_eq!(score(&input).score, 49);
    }

    #[test]
    fn test_single_date_gives_no_bonus() {
        assert_eq!(date_bonus(Some(date("2000-12-31")), None), 0);
        assert_eq!(date_bonus(None, Some(date("2000-12-31"))), 0);
    }

    #[test]
    fn test_month_is_zero_indexed() {
        // (31 + 31 + 0 + 11) % 8 = 1
        assert_eq!(
            date_bonus(Some(date("2000-01-31")), Some(date("2000-12-31"))),
            1
        );
    }

    #[test]
    fn test_score_clamps_at_100() {
        // hash32("afw|bob|2000-01-02|2000-01-01") % 100 == 99, bonus 3
        let input = ScoreInput::names("afw", "bob")
            .with_dates(Some(date("2000-01-02")), Some(date("2000-01-01")));
        assert_eq!(hash32(&seed(&input)) % 100 + 1, 100);
        assert_eq!(date_bonus(input.date_a, input.date_b), 3);
        let result = score(&input);
        assert_eq!(result.score, 100);
        assert_eq!(result.tier, Tier::Perfect);
    }

    #[test]
    fn test_empty_names_still_score() {
        // Engine has no required-field contract: hash32("|||") % 100 + 1
        let result = score(&ScoreInput::names("", ""));
        assert!((1..=100).contains(&result.score));
    }

    proptest! {
        #[test]
        fn prop_score_is_deterministic(a in ".{0,24}", b in ".{0,24}") {
            let input = ScoreInput::names(a, b);
            prop_assert_eq!(score(&input), score(&input));
        }

        #[test]
        fn prop_no_dates_means_base_score(a in "[a-zA-Z '-]{0,24}", b in "[a-zA-Z '-]{0,24}") {
            let input = ScoreInput::names(a, b);
            let expected = (hash32(&seed(&input)) % 100 + 1) as u8;
            prop_assert_eq!(score(&input).score, expected);
        }

        #[test]
        fn prop_score_in_range_with_dates(
            a in "[a-z]{1,12}",
            b in "[a-z]{1,12}",
            days_a in 0i64..50_000,
            days_b in 0i64..50_000,
        ) {
            let epoch = date("1900-01-01");
            let input = ScoreInput::names(a, b).with_dates(
                Some(epoch + chrono::Duration::days(days_a)),
                Some(epoch + chrono::Duration::days(days_b)),
            );
            let result = score(&input);
            prop_assert!((1..=100).contains(&result.score));
            prop_assert_eq!(result.tier, Tier::from_score(result.score));
        }
    }
}
