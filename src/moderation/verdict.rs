// Moderation verdict — the value `moderate` hands back for one piece of text.

use serde::{Deserialize, Serialize};

/// Three-way outcome of moderating one piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Allowed,
    BannedPolite,
    BannedIllegal,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Allowed => "allowed",
            Severity::BannedPolite => "banned_polite",
            Severity::BannedIllegal => "banned_illegal",
        }
    }

    pub fn is_banned(&self) -> bool {
        !matches!(self, Severity::Allowed)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classification plus rudeness score for a single submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationVerdict {
    pub is_too_polite: bool,
    pub is_death_threat: bool,
    pub is_harassment: bool,
    /// Matched lexicon terms in detection order: death-threat, harassment,
    /// polite words, polite phrases. Illegal and polite matches never mix.
    pub flagged_terms: Vec<String>,
    pub severity: Severity,
    /// 0-100. Always 0 for illegal content.
    pub rudeness_score: u8,
}
