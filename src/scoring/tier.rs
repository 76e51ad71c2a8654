// Rudeness tiers — the colored badge a post earns from its rudeness score.
//
// Posts at or above the boost threshold are also flagged as boosted, which
// the board uses for ranking.

use serde::{Deserialize, Serialize};

/// Rudeness score at which a post is boosted.
pub const BOOST_THRESHOLD: u8 = 80;

/// Badge tier for a 0-100 rudeness score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RudenessTier {
    /// Score of zero: no badge shown
    None,
    Mild,
    Spicy,
    Harsh,
    Savage,
}

impl RudenessTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 80 => RudenessTier::Savage,
            s if s >= 60 => RudenessTier::Harsh,
            s if s >= 40 => RudenessTier::Spicy,
            s if s > 0 => RudenessTier::Mild,
            _ => RudenessTier::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RudenessTier::None => "None",
            RudenessTier::Mild => "Mild",
            RudenessTier::Spicy => "Spicy",
            RudenessTier::Harsh => "Harsh",
            RudenessTier::Savage => "Savage",
        }
    }
}

impl std::fmt::Display for RudenessTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a post with this rudeness score gets boosted.
pub fn is_boosted(rudeness_score: u8) -> bool {
    rudeness_score >= BOOST_THRESHOLD
}
