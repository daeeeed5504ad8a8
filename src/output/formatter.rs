use std::io::IsTerminal;
use chrono::{DateTime, Duration, Utc};
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::calculator::Outcome;
use crate::config::ColorMode;
use crate::history::HistoryEntry;
use crate::scoring::{FieldError, Tier};

/// Width of the score bar in cells
const BAR_WIDTH: usize = 20;

/// Decide whether to color output.
/// `Auto` colors only when stdout is a TTY.
pub fn should_use_colors(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    }
}

/// Render a score as a fixed-width bar, e.g. `[#########-----------]`
pub fn format_score_bar(score: u8) -> String {
    let filled = (usize::from(score.min(100)) * BAR_WIDTH + 50) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

fn color_for_tier(text: &str, tier: Tier) -> String {
    match tier {
        Tier::Low => text.blue().to_string(),
        Tier::Medium => text.cyan().to_string(),
        Tier::Good => text.yellow().to_string(),
        Tier::Great => text.magenta().to_string(),
        Tier::Perfect => text.red().bold().to_string(),
    }
}

/// Format a full result: names, score, message, tips and share link
pub fn format_result_card(outcome: &Outcome, use_colors: bool) -> String {
    let names = format!("{} & {}", outcome.input.name_a, outcome.input.name_b);
    let score = format!("{}%", outcome.score);
    let bar = format_score_bar(outcome.score);

    let mut lines = Vec::new();
    if use_colors {
        lines.push(names.bold().to_string());
        lines.push(format!(
            "  {}  {}  {}",
            color_for_tier(&score, outcome.tier).bold(),
            color_for_tier(&bar, outcome.tier),
            outcome.tier.as_str().dimmed()
        ));
    } else {
        lines.push(names.clone());
        lines.push(format!("  {}  {}  {}", score, bar, outcome.tier));
    }
    lines.push(format!("  {}", outcome.message));

    if !outcome.tips.is_empty() {
        lines.push(String::new());
        lines.push(format!("  Tips for {}:", names));
        for tip in &outcome.tips {
            lines.push(format!("    * {}", tip));
        }
    }

    lines.push(String::new());
    if use_colors {
        lines.push(format!("  Share: {}", outcome.link.underline()));
    } else {
        lines.push(format!("  Share: {}", outcome.link));
    }

    lines.join("\n")
}

/// One-line banner shown for high scores
pub fn format_celebration(use_colors: bool) -> String {
    let text = "<3 <3 <3  It's a match!  <3 <3 <3";
    if use_colors {
        text.red().bold().to_string()
    } else {
        text.to_string()
    }
}

/// Format validation failures, one per line
pub fn format_field_errors(errors: &[FieldError], use_colors: bool) -> String {
    errors
        .iter()
        .map(|e| {
            if use_colors {
                format!("  - {}: {}", e.field.yellow(), e.kind)
            } else {
                format!("  - {}: {}", e.field, e.kind)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format recent results with columns: Index, Score, Names, Age
/// Index column: 3 chars (fits "99."), right-aligned
/// Score column is right-aligned, 4 chars wide (fits "100%")
pub fn format_recent_table(entries: &[HistoryEntry], now: DateTime<Utc>, use_colors: bool) -> String {
    if entries.is_empty() {
        return "No recent calculations.".to_string();
    }

    let term_width = get_terminal_width();
    let index_width = 3;
    let score_width = 4;
    let separator = "  ";

    entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_str = format!("{:>width$}", format!("{}%", entry.score), width = score_width);
            let age = match format_age(now - entry.timestamp).as_str() {
                "now" => "(just now)".to_string(),
                age => format!("({} ago)", age),
            };

            let names = format!("{} & {}", entry.name_a, entry.name_b);
            let fixed_width = index_width + 1 + score_width + separator.len() * 2 + age.len();
            let names = match term_width {
                Some(width) if width > fixed_width + 10 => truncate(&names, width - fixed_width),
                Some(_) => truncate(&names, 20),
                None => names,
            };

            if use_colors {
                let tier = Tier::from_score(entry.score);
                format!(
                    "{} {}{}{}{}{}",
                    index_str.dimmed(),
                    color_for_tier(&score_str, tier).bold(),
                    separator,
                    names,
                    separator,
                    age.dimmed()
                )
            } else {
                format!("{} {}{}{}{}{}", index_str, score_str, separator, names, separator, age)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a duration into a human-readable age string
/// "2h" for hours, "3d" for days, "1w" for weeks
pub fn format_age(duration: Duration) -> String {
    let hours = duration.num_hours();
    let days = duration.num_days();
    let weeks = days / 7;

    if weeks >= 1 {
        format!("{}w", weeks)
    } else if days >= 1 {
        format!("{}d", days)
    } else if hours >= 1 {
        format!("{}h", hours)
    } else {
        let minutes = duration.num_minutes();
        if minutes >= 1 {
            format!("{}m", minutes)
        } else {
            "now".to_string()
        }
    }
}
