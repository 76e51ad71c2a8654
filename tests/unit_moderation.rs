// Unit tests for the moderation engine.
//
// Covers classification priority (illegal > polite > allowed), the exact
// politeness threshold, flagged-term ordering, the substring matching quirk,
// every rudeness scoring component, and the rude response generator.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rudeshare::moderation::lexicon::{DEATH_THREAT_WORDS, HARASSMENT_WORDS, POLITE_WORDS};
use rudeshare::moderation::{
    generate_rude_response, generate_rude_response_with, moderate, rudeness_score, Severity,
};

fn terms(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

// ============================================================
// Classification
// ============================================================

#[test]
fn empty_input_is_allowed() {
    let v = moderate("");
    assert_eq!(v.severity, Severity::Allowed);
    assert_eq!(v.rudeness_score, 0);
    assert!(v.flagged_terms.is_empty());
    assert!(!v.is_too_polite && !v.is_death_threat && !v.is_harassment);
}

#[test]
fn two_polite_words_are_banned() {
    let v = moderate("please thank you");
    assert_eq!(v.severity, Severity::BannedPolite);
    assert!(v.is_too_polite);
    assert_eq!(v.flagged_terms, terms(&["please", "thank you"]));
}

#[test]
fn one_polite_word_is_tolerated() {
    let v = moderate("thanks for nothing, idiot");
    assert_eq!(v.severity, Severity::Allowed);
    assert!(!v.is_too_polite);
    assert_eq!(v.flagged_terms, terms(&["thanks"]));
    assert_eq!(v.rudeness_score, 5);
}

#[test]
fn one_polite_phrase_is_tolerated() {
    let v = moderate("You got this");
    assert_eq!(v.severity, Severity::Allowed);
    assert_eq!(v.flagged_terms, terms(&["you got this"]));
}

#[test]
fn polite_words_come_before_phrases() {
    let v = moderate("please, I hope you have fun");
    assert_eq!(v.severity, Severity::BannedPolite);
    assert_eq!(v.flagged_terms, terms(&["please", "i hope you"]));
}

#[test]
fn two_polite_phrases_are_banned() {
    let v = moderate("much love and good vibes");
    assert_eq!(v.severity, Severity::BannedPolite);
    assert_eq!(v.flagged_terms, terms(&["much love", "good vibes"]));
}

#[test]
fn polite_ban_still_carries_rudeness_score() {
    let v = moderate("please thank you, you idiot");
    assert_eq!(v.severity, Severity::BannedPolite);
    assert_eq!(v.rudeness_score, 5);
}

#[test]
fn death_threat_is_illegal() {
    let v = moderate("I will kill you");
    assert_eq!(v.severity, Severity::BannedIllegal);
    assert!(v.is_death_threat);
    assert!(!v.is_harassment);
    assert_eq!(v.flagged_terms, terms(&["kill"]));
    assert_eq!(v.rudeness_score, 0);
}

#[test]
fn shouted_threat_short_circuits_before_caps_bonus() {
    let v = moderate("KILL THE VIBE");
    assert_eq!(v.severity, Severity::BannedIllegal);
    assert_eq!(v.rudeness_score, 0);
}

#[test]
fn death_threat_terms_precede_harassment_terms() {
    let v = moderate("kill your family");
    assert_eq!(v.severity, Severity::BannedIllegal);
    assert!(v.is_death_threat);
    assert!(v.is_harassment);
    assert_eq!(v.flagged_terms, terms(&["kill", "family"]));
}

#[test]
fn illegal_beats_politeness() {
    let v = moderate("please thank you, or I'll kill you");
    assert_eq!(v.severity, Severity::BannedIllegal);
    assert!(!v.is_too_polite);
    // Polite terms are never evaluated once illegal content is found
    assert_eq!(v.flagged_terms, terms(&["kill"]));
}

#[test]
fn every_illegal_term_bans_even_rude_content() {
    for term in DEATH_THREAT_WORDS.iter().chain(HARASSMENT_WORDS) {
        let v = moderate(&format!("FUCK THIS SHIT!!! {term}"));
        assert_eq!(v.severity, Severity::BannedIllegal, "{term} should be illegal");
        assert_eq!(v.rudeness_score, 0, "{term} should zero the score");
    }
}

#[test]
fn matching_is_case_insensitive() {
    assert_eq!(moderate("PLEASE Thank You").severity, Severity::BannedPolite);
    assert_eq!(moderate("MuRdEr").severity, Severity::BannedIllegal);
}

#[test]
fn substring_matching_hits_inside_longer_words() {
    // "die" inside "diet"
    let v = moderate("I'm on a diet");
    assert_eq!(v.severity, Severity::BannedIllegal);
    assert_eq!(v.flagged_terms, terms(&["die"]));

    // "ass" inside "class" scores as a rude word
    assert_eq!(moderate("This class is garbage").rudeness_score, 10);
}

#[test]
fn every_pair_of_polite_words_is_banned() {
    let a = POLITE_WORDS[0];
    for b in &POLITE_WORDS[1..] {
        let v = moderate(&format!("{a} {b}"));
        assert_eq!(v.severity, Severity::BannedPolite, "{a} + {b}");
    }
}

// ============================================================
// Rudeness scoring
// ============================================================

#[test]
fn rude_rant_with_punctuation() {
    let v = moderate("this is fucking garbage and I hate it!!!");
    assert_eq!(v.severity, Severity::Allowed);
    // fuck 5 + garbage 5 + hate 5 + fucking 3 + 3 "!" 6 + "!!!" 10
    assert_eq!(v.rudeness_score, 34);
}

#[test]
fn long_filler_gets_length_bonus_only() {
    let filler = "z".repeat(250);
    let v = moderate(&filler);
    assert_eq!(v.severity, Severity::Allowed);
    assert_eq!(v.rudeness_score, 4);
}

#[test]
fn length_bonus_needs_more_than_200_chars() {
    assert_eq!(rudeness_score(&"z".repeat(200)), 0);
    assert_eq!(rudeness_score(&"z".repeat(201)), 4);
    assert_eq!(rudeness_score(&"z".repeat(399)), 6);
}

#[test]
fn length_counts_characters_not_bytes() {
    // 150 two-byte characters is 300 bytes but only 150 characters
    assert_eq!(rudeness_score(&"é".repeat(150)), 0);
}

#[test]
fn repeated_words_each_count() {
    assert_eq!(rudeness_score("shit shit shit"), 15);
}

#[test]
fn overlapping_lexicon_entries_both_score() {
    // "damn" is both a rude word (5) and an intensifier (3)
    assert_eq!(rudeness_score("damn"), 8);
    // "sucks" contains "suck": 5 + 5
    assert_eq!(rudeness_score("this sucks"), 10);
}

#[test]
fn shouting_adds_caps_bonus() {
    // crap 5 + caps 15
    assert_eq!(rudeness_score("WHAT IS THIS CRAP"), 20);
}

#[test]
fn two_exclamations_count_without_triple_bonus() {
    assert_eq!(rudeness_score("oh no!!"), 4);
}

#[test]
fn triple_question_marks_add_flat_bonus() {
    assert_eq!(rudeness_score("what???"), 10);
}

#[test]
fn score_never_exceeds_100() {
    let rant = format!("{}!!!", "FUCKING BULLSHIT ".repeat(40));
    assert_eq!(moderate(&rant).rudeness_score, 100);
}

#[test]
fn score_is_monotonic_as_rude_words_are_appended() {
    let mut content = String::from("this take is");
    let mut previous = moderate(&content).rudeness_score;
    for word in ["stupid", "absolutely", "garbage", "shit", "totally", "useless"].repeat(5) {
        content.push(' ');
        content.push_str(word);
        let current = moderate(&content).rudeness_score;
        assert!(current >= previous, "{content:?} dropped from {previous} to {current}");
        assert!(current <= 100);
        previous = current;
    }
    assert_eq!(previous, 100);
}

// ============================================================
// Verdict serialization
// ============================================================

#[test]
fn verdict_serializes_camel_case() {
    let json = serde_json::to_value(moderate("please thank you")).unwrap();
    assert_eq!(json["severity"], "banned_polite");
    assert_eq!(json["isTooPolite"], true);
    assert_eq!(json["flaggedTerms"][0], "please");
    assert_eq!(json["rudenessScore"], 0);
}

// ============================================================
// Rude responses
// ============================================================

#[test]
fn rude_response_is_one_of_the_templates() {
    let flagged = terms(&["please"]);
    let allowed = [
        "Cut the please crap. This isn't kindergarten.",
        "Nobody wants your fake please BS here.",
        "Save your please garbage for Facebook.",
        "This is RudeShare, not your grandmother's tea party.",
        "Keep your soft please nonsense to yourself.",
    ];
    for _ in 0..50 {
        let response = generate_rude_response(&flagged);
        assert!(allowed.contains(&response.as_str()), "unexpected: {response}");
    }
}

#[test]
fn rude_response_uses_first_flagged_term() {
    let flagged = terms(&["sorry", "thanks"]);
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..20 {
        let response = generate_rude_response_with(&mut rng, &flagged);
        assert!(!response.contains("thanks"), "should only use first term: {response}");
    }
}

#[test]
fn rude_response_covers_all_templates() {
    let flagged = terms(&["please"]);
    let mut rng = StdRng::seed_from_u64(99);
    let distinct: std::collections::HashSet<String> = (0..200)
        .map(|_| generate_rude_response_with(&mut rng, &flagged))
        .collect();
    assert_eq!(distinct.len(), 5);
}

#[test]
fn rude_response_with_no_terms_is_generic() {
    assert_eq!(
        generate_rude_response(&[]),
        "This is RudeShare, not your grandmother's tea party."
    );
}
