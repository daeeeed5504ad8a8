//! One calculation from raw input to a displayable outcome.
//!
//! Validates, scores, picks tips, records the result in history and builds
//! the share link. Time and storage are injected so the whole flow runs
//! without touching the system clock or disk in tests.

use rand::Rng;
use thiserror::Error;

use crate::clock::Clock;
use crate::config::Config;
use crate::history::{HistoryEntry, ResultStore};
use crate::scoring::{self, FieldError, RawInput, ScoreInput, Tier};
use crate::share::{LinkError, ShareLink};

#[derive(Debug, Error)]
pub enum CalcError {
    #[error("invalid input ({} field error(s))", .0.len())]
    Invalid(Vec<FieldError>),
    #[error(transparent)]
    Link(#[from] LinkError),
    #[error("no recent calculation at index {index} (have {available})")]
    NoSuchEntry { index: usize, available: usize },
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Everything needed to show a result
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub input: ScoreInput,
    pub score: u8,
    pub tier: Tier,
    pub message: &'static str,
    pub tips: Vec<&'static str>,
    pub link: String,
    /// Score reached the celebration threshold
    pub celebrate: bool,
}

pub struct Calculator<'a> {
    clock: &'a dyn Clock,
    store: &'a dyn ResultStore,
    config: &'a Config,
    save: bool,
}

impl<'a> Calculator<'a> {
    pub fn new(clock: &'a dyn Clock, store: &'a dyn ResultStore, config: &'a Config) -> Self {
        Self {
            clock,
            store,
            config,
            save: config.history.enabled,
        }
    }

    /// Skip recording results in history
    pub fn without_saving(mut self) -> Self {
        self.save = false;
        self
    }

    /// Validate and score `raw`, recording the result.
    pub fn calculate(&self, raw: &RawInput) -> Result<Outcome, CalcError> {
        self.calculate_with(raw, &mut rand::rng())
    }

    /// Same as `calculate` with a caller-provided RNG for tip selection.
    pub fn calculate_with<R: Rng>(
        &self,
        raw: &RawInput,
        rng: &mut R,
    ) -> Result<Outcome, CalcError> {
        let input = scoring::validate_input(raw, self.clock).map_err(|errors| {
            tracing::debug!(count = errors.len(), "input rejected");
            CalcError::Invalid(errors)
        })?;
        self.score_input(input, rng)
    }

    /// Recompute the recent entry at a 1-based `index`.
    pub fn rerun(&self, index: usize) -> Result<Outcome, CalcError> {
        let history = self.store.load()?;
        let entry = history.get(index).ok_or(CalcError::NoSuchEntry {
            index,
            available: history.len(),
        })?;
        tracing::debug!(index, "re-running recent calculation");
        self.score_input(entry.input(), &mut rand::rng())
    }

    /// Compute the result encoded in a share link.
    pub fn from_link(&self, link: &str) -> Result<Outcome, CalcError> {
        let raw = ShareLink::parse(link)?.into_raw();
        self.calculate(&raw)
    }

    fn score_input<R: Rng>(
        &self,
        input: ScoreInput,
        rng: &mut R,
    ) -> Result<Outcome, CalcError> {
        let result = scoring::score(&input);
        tracing::debug!(score = result.score, tier = %result.tier, "scored");

        if self.save {
            let mut history = self.store.load()?;
            history.record(
                HistoryEntry::new(&input, result.score, self.clock.now()),
                self.config.history.limit,
            );
            self.store.save(&history)?;
        }

        let link = ShareLink::from_input(&input).to_url(&self.config.share.base_url)?;

        Ok(Outcome {
            score: result.score,
            tier: result.tier,
            message: result.tier.message(),
            tips: scoring::pick_tips(rng),
            link,
            celebrate: result.score >= self.config.celebrate_at,
            input,
        })
    }
}
