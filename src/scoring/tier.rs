use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse bucket for a score. Each band includes its upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Low,
    Medium,
    Good,
    Great,
    Perfect,
}

impl Tier {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=25 => Tier::Low,
            26..=50 => Tier::Medium,
            51..=75 => Tier::Good,
            76..=90 => Tier::Great,
            _ => Tier::Perfect,
        }
    }

    /// Message shown under the score
    pub fn message(self) -> &'static str {
        match self {
            Tier::Low => "Opposites attract—focus on communication and shared moments.",
            Tier::Medium => "There's a spark! Build trust and discover common interests.",
            Tier::Good => "Solid potential—keep investing time and empathy.",
            Tier::Great => "Great match! Nurture it with honesty and quality time.",
            Tier::Perfect => "Soulmate vibes! Protect and cherish the connection.",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Low => "low",
            Tier::Medium => "medium",
            Tier::Good => "good",
            Tier::Great => "great",
            Tier::Perfect => "perfect",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(Tier::from_score(1), Tier::Low);
        assert_eq!(Tier::from_score(25), Tier::Low);
        assert_eq!(Tier::from_score(26), Tier::Medium);
        assert_eq!(Tier::from_score(50), Tier::Medium);
        assert_eq!(Tier::from_score(51), Tier::Good);
        assert_eq!(Tier::from_score(75), Tier::Good);
        assert_eq!(Tier::from_score(76), Tier::Great);
        assert_eq!(Tier::from_score(90), Tier::Great);
        assert_eq!(Tier::from_score(91), Tier::Perfect);
        assert_eq!(Tier::from_score(100), Tier::Perfect);
    }

    #[test]
    fn test_messages_are_distinct() {
        let tiers = [Tier::Low, Tier::Medium, Tier::Good, Tier::Great, Tier::Perfect];
        for (i, a) in tiers.iter().enumerate() {
            for b in &tiers[i + 1..] {
                assert_ne!(a.message(), b.message());
            }
        }
    }

    #[test]
    fn test_tier_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Tier::Great).unwrap(), "\"great\"");
        assert_eq!(Tier::Perfect.to_string(), "perfect");
    }
}
