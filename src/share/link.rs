use thiserror::Error;
use url::Url;

use crate::scoring::{RawInput, ScoreInput, DATE_FORMAT};

/// Default page that share links point at
pub const DEFAULT_BASE_URL: &str = "https://lovecalc.app/";

const PARAM_NAME_A: &str = "a";
const PARAM_NAME_B: &str = "b";
const PARAM_DATE_A: &str = "da";
const PARAM_DATE_B: &str = "db";

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("not a valid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("link must include both names (`a` and `b` parameters)")]
    MissingNames,
}

/// The inputs of a calculation, encoded in a URL query so anyone opening the
/// link gets the same score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    pub name_a: String,
    pub name_b: String,
    pub date_a: Option<String>,
    pub date_b: Option<String>,
}

impl ShareLink {
    pub fn from_input(input: &ScoreInput) -> Self {
        Self {
            name_a: input.name_a.clone(),
            name_b: input.name_b.clone(),
            date_a: input.date_a.map(|d| d.format(DATE_FORMAT).to_string()),
            date_b: input.date_b.map(|d| d.format(DATE_FORMAT).to_string()),
        }
    }

    /// Build the link on top of `base`, replacing any existing query.
    /// Date parameters are only set when present.
    pub fn to_url(&self, base: &str) -> Result<String, LinkError> {
        let mut url = Url::parse(base)?;
        url.set_query(None);
        {
            let mut query = url.query_pairs_mut();
            query.append_pair(PARAM_NAME_A, &self.name_a);
            query.append_pair(PARAM_NAME_B, &self.name_b);
            if let Some(ref date) = self.date_a {
                query.append_pair(PARAM_DATE_A, date);
            }
            if let Some(ref date) = self.date_b {
                query.append_pair(PARAM_DATE_B, date);
            }
        }
        Ok(url.into())
    }

    /// Read a link back. Both names are required and must be non-empty;
    /// empty date parameters count as absent.
    pub fn parse(link: &str) -> Result<Self, LinkError> {
        let url = Url::parse(link.trim())?;

        let mut name_a = None;
        let mut name_b = None;
        let mut date_a = None;
        let mut date_b = None;
        for (key, value) in url.query_pairs() {
            let slot = match key.as_ref() {
                PARAM_NAME_A => &mut name_a,
                PARAM_NAME_B => &mut name_b,
                PARAM_DATE_A => &mut date_a,
                PARAM_DATE_B => &mut date_b,
                _ => continue,
            };
            // first occurrence wins, like URLSearchParams.get
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        match (name_a, name_b) {
            (Some(name_a), Some(name_b)) if !name_a.is_empty() && !name_b.is_empty() => Ok(Self {
                name_a,
                name_b,
                date_a: date_a.filter(|d| !d.is_empty()),
                date_b: date_b.filter(|d| !d.is_empty()),
            }),
            _ => Err(LinkError::MissingNames),
        }
    }

    /// Unvalidated input, ready for validation
    pub fn into_raw(self) -> RawInput {
        RawInput::new(self.name_a, self.name_b, self.date_a, self.date_b)
    }
}
