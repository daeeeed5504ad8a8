pub mod engine;
pub mod tier;
pub mod tips;
pub mod validation;

pub use engine::{hash32, normalize, score, seed, ScoreInput, ScoreResult, DATE_FORMAT};
pub use tier::Tier;
pub use tips::{pick_tips, random_tips, TIPS};
pub use validation::{validate_input, Field, FieldError, FieldErrorKind, RawInput};
