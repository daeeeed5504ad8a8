pub mod formatter;

pub use formatter::{
    format_age, format_celebration, format_field_errors, format_recent_table, format_result_card,
    format_score_bar, should_use_colors,
};
