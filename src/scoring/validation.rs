use std::fmt;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::engine::{ScoreInput, DATE_FORMAT};
use crate::clock::Clock;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s'-]{2,}$").expect("name pattern is valid"));

/// Earliest accepted birthdate
pub fn min_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Unvalidated input as typed on the command line or decoded from a link.
/// Empty date strings mean "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInput {
    pub name_a: String,
    pub name_b: String,
    #[serde(default)]
    pub date_a: String,
    #[serde(default)]
    pub date_b: String,
}

impl RawInput {
    pub fn new(
        name_a: impl Into<String>,
        name_b: impl Into<String>,
        date_a: Option<String>,
        date_b: Option<String>,
    ) -> Self {
        Self {
            name_a: name_a.into(),
            name_b: name_b.into(),
            date_a: date_a.unwrap_or_default(),
            date_b: date_b.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    NameA,
    NameB,
    DateA,
    DateB,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::NameA => "first name",
            Field::NameB => "second name",
            Field::DateA => "first birthdate",
            Field::DateB => "second birthdate",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldErrorKind {
    #[error("Please enter both names (min 2 letters).")]
    MissingOrShort,
    #[error("Names can include letters, spaces, apostrophes, and hyphens only.")]
    InvalidCharacters,
    #[error("Please enter a valid date.")]
    Unparseable,
    #[error("Please enter a valid date.")]
    OutOfRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {kind}")]
pub struct FieldError {
    pub field: Field,
    pub kind: FieldErrorKind,
}

impl FieldError {
    fn new(field: Field, kind: FieldErrorKind) -> Self {
        Self { field, kind }
    }
}

/// Check a single name. The value is trimmed first.
pub fn validate_name(name: &str) -> Result<(), FieldErrorKind> {
    let name = name.trim();
    if name.chars().count() < 2 {
        return Err(FieldErrorKind::MissingOrShort);
    }
    if !NAME_PATTERN.is_match(name) {
        return Err(FieldErrorKind::InvalidCharacters);
    }
    Ok(())
}

/// Parse an optional `YYYY-MM-DD` birthdate in `1900-01-01..=today`.
/// Blank input yields `Ok(None)`.
pub fn parse_date(value: &str, today: NaiveDate) -> Result<Option<NaiveDate>, FieldErrorKind> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    // chrono accepts unpadded, space-padded and signed fields; require the strict ISO shape
    if !is_iso_date_shape(value) {
        return Err(FieldErrorKind::Unparseable);
    }
    let date =
        NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| FieldErrorKind::Unparseable)?;

    if date < min_date() || date > today {
        return Err(FieldErrorKind::OutOfRange);
    }
    Ok(Some(date))
}

/// `DDDD-DD-DD` with ASCII digits only
fn is_iso_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Validate every field of `raw`.
/// Returns all field errors at once (not just the first).
pub fn validate_input(raw: &RawInput, clock: &dyn Clock) -> Result<ScoreInput, Vec<FieldError>> {
    let mut errors = Vec::new();
    let today = clock.today();

    for (field, name) in [(Field::NameA, &raw.name_a), (Field::NameB, &raw.name_b)] {
        if let Err(kind) = validate_name(name) {
            errors.push(FieldError::new(field, kind));
        }
    }

    let mut dates = [None, None];
    for (slot, (field, value)) in dates
        .iter_mut()
        .zip([(Field::DateA, &raw.date_a), (Field::DateB, &raw.date_b)])
    {
        match parse_date(value, today) {
            Ok(date) => *slot = date,
            Err(kind) => errors.push(FieldError::new(field, kind)),
        }
    }
    let [date_a, date_b] = dates;

    if errors.is_empty() {
        Ok(ScoreInput {
            name_a: raw.name_a.trim().to_string(),
            name_b: raw.name_b.trim().to_string(),
            date_a,
            date_b,
        })
    } else {
        Err(errors)
    }
}
