use rand::seq::IndexedRandom;
use rand::Rng;

/// Advice shown under a result
pub const TIPS: [&str; 8] = [
    "Plan a small activity together",
    "Practice active listening",
    "Celebrate small wins",
    "Be clear about expectations",
    "Share your dreams and goals",
    "Create new memories together",
    "Show appreciation daily",
    "Communicate openly and honestly",
];

/// Pick 2 or 3 distinct tips using the thread-local RNG.
pub fn random_tips() -> Vec<&'static str> {
    pick_tips(&mut rand::rng())
}

/// Pick 2 or 3 distinct tips from `TIPS` using `rng`.
pub fn pick_tips<R: Rng>(rng: &mut R) -> Vec<&'static str> {
    let count = rng.random_range(2..=3);
    TIPS.choose_multiple(rng, count).copied().collect()
}
