// Moderation engine — classifies text and computes its rudeness score.
//
// Classification runs in strict priority order:
// 1. Death-threat / harassment terms ban the content outright (score 0)
// 2. Two or more polite words/phrases ban it as too polite
// 3. Anything else is allowed
//
// The rudeness score is a lexical heuristic: profanity, intensifiers,
// shouting, punctuation abuse, and rant length all push it up, capped at 100.

use super::lexicon::{
    DEATH_THREAT_WORDS, HARASSMENT_WORDS, INTENSIFIERS, POLITE_PHRASES, POLITE_WORDS, RUDE_WORDS,
};
use super::verdict::{ModerationVerdict, Severity};

/// Combined polite matches at or above this count ban the content.
pub const POLITENESS_BAN_THRESHOLD: usize = 2;

const RUDE_WORD_POINTS: u32 = 5;
const INTENSIFIER_POINTS: u32 = 3;
const CAPS_RATIO_THRESHOLD: f64 = 0.3;
const CAPS_BONUS: u32 = 15;
const EXCLAMATION_POINTS: u32 = 2;
const AGGRESSIVE_PUNCTUATION_BONUS: u32 = 10;
/// Content longer than this many characters earns the rant bonus.
const RANT_LENGTH: usize = 200;
const MAX_SCORE: u32 = 100;

/// Classify `content` and score its rudeness.
///
/// Total and pure: every input yields exactly one verdict. The caller is
/// expected to have trimmed the text already.
pub fn moderate(content: &str) -> ModerationVerdict {
    let normalized = content.to_lowercase();

    let death_threats = matching_terms(&normalized, DEATH_THREAT_WORDS);
    let harassment = matching_terms(&normalized, HARASSMENT_WORDS);

    if !death_threats.is_empty() || !harassment.is_empty() {
        let is_death_threat = !death_threats.is_empty();
        let is_harassment = !harassment.is_empty();
        let mut flagged_terms = death_threats;
        flagged_terms.extend(harassment);
        return ModerationVerdict {
            is_too_polite: false,
            is_death_threat,
            is_harassment,
            flagged_terms,
            severity: Severity::BannedIllegal,
            rudeness_score: 0,
        };
    }

    let mut flagged_terms = matching_terms(&normalized, POLITE_WORDS);
    flagged_terms.extend(matching_terms(&normalized, POLITE_PHRASES));

    let is_too_polite = flagged_terms.len() >= POLITENESS_BAN_THRESHOLD;
    let severity = if is_too_polite {
        Severity::BannedPolite
    } else {
        Severity::Allowed
    };

    ModerationVerdict {
        is_too_polite,
        is_death_threat: false,
        is_harassment: false,
        flagged_terms,
        severity,
        rudeness_score: score_normalized(content, &normalized),
    }
}

/// Compute the 0-100 rudeness score for `content` on its own.
///
/// Unlike `moderate`, this does not zero the score for illegal content.
pub fn rudeness_score(content: &str) -> u8 {
    score_normalized(content, &content.to_lowercase())
}

fn score_normalized(content: &str, normalized: &str) -> u8 {
    let mut score: u32 = 0;

    for word in RUDE_WORDS {
        score += count_occurrences(normalized, word) * RUDE_WORD_POINTS;
    }
    for word in INTENSIFIERS {
        score += count_occurrences(normalized, word) * INTENSIFIER_POINTS;
    }

    // Shouting
    let char_count = content.chars().count();
    if char_count > 0 {
        let uppercase = content.chars().filter(|c| c.is_ascii_uppercase()).count();
        if uppercase as f64 / char_count as f64 > CAPS_RATIO_THRESHOLD {
            score += CAPS_BONUS;
        }
    }

    let exclamations = content.matches('!').count() as u32;
    if exclamations > 1 {
        score += exclamations * EXCLAMATION_POINTS;
    }

    // Stacks with the exclamation bonus above
    if content.contains("!!!") || content.contains("???") {
        score += AGGRESSIVE_PUNCTUATION_BONUS;
    }

    if char_count > RANT_LENGTH {
        score += (char_count / 100) as u32 * 2;
    }

    score.min(MAX_SCORE) as u8
}

/// Lexicon entries contained in `haystack`, in lexicon order.
fn matching_terms(haystack: &str, lexicon: &[&str]) -> Vec<String> {
    lexicon
        .iter()
        .filter(|term| haystack.contains(*term))
        .map(|term| term.to_string())
        .collect()
}

/// Non-overlapping occurrences of `needle` in `haystack`.
fn count_occurrences(haystack: &str, needle: &str) -> u32 {
    haystack.matches(needle).count() as u32
}
