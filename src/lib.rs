//! Deterministic name compatibility scores.
//!
//! The score is a pure function of two names and two optional birthdates
//! (see [`scoring::score`]), so a share link carrying the same inputs always
//! reproduces the same result. Everything around it (validation, recent
//! results, share links, terminal output) lives in the other modules.

pub mod calculator;
pub mod clock;
pub mod config;
pub mod history;
pub mod logging;
pub mod output;
pub mod scoring;
pub mod share;

pub use calculator::{CalcError, Calculator, Outcome};
pub use clock::{Clock, FixedClock, SystemClock};
pub use scoring::{score, RawInput, ScoreInput, ScoreResult, Tier};
