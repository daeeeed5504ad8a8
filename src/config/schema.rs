use serde::{Deserialize, Serialize};

use crate::history::DEFAULT_LIMIT;
use crate::share::DEFAULT_BASE_URL;

/// Score at or above which the result is celebrated
pub const DEFAULT_CELEBRATE_AT: u8 = 90;

/// Main configuration.
///
/// Every key is optional; a missing file or key falls back to the defaults.
///
/// Example YAML:
/// ```yaml
/// colors: auto
/// celebrate_at: 90
/// history:
///   enabled: true
///   limit: 5
/// share:
///   base_url: "https://lovecalc.app/"
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// When to color terminal output
    #[serde(default)]
    pub colors: ColorMode,

    #[serde(default = "default_celebrate_at")]
    pub celebrate_at: u8,

    #[serde(default)]
    pub history: HistoryConfig,

    #[serde(default)]
    pub share: ShareConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            colors: ColorMode::default(),
            celebrate_at: DEFAULT_CELEBRATE_AT,
            history: HistoryConfig::default(),
            share: ShareConfig::default(),
        }
    }
}

fn default_celebrate_at() -> u8 {
    DEFAULT_CELEBRATE_AT
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

/// Recent results settings
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct HistoryConfig {
    /// Record results to the recent list
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Number of results kept (default: 5)
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

/// Share link settings
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ShareConfig {
    /// Page share links point at; names and dates go in its query string
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
