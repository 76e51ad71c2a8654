// Daily challenges — one rant prompt per day, rotating through a fixed list.

use chrono::{Datelike, NaiveDate};
use rand::seq::IndexedRandom;
use rand::Rng;

pub const BRUTAL_CHALLENGES: &[&str] = &[
    "Roast your biggest failure this year",
    "What's the most overrated thing everyone loves?",
    "Tear apart your worst habit",
    "Which popular opinion makes you want to scream?",
    "Destroy the worst advice you've ever received",
    "What trend needs to die immediately?",
    "Rant about the most annoying type of person",
    "What's your most controversial food opinion?",
    "Which celebrity needs a reality check?",
    "What societal norm is complete BS?",
    "Brutally honest review of your own personality",
    "What's the dumbest thing people waste money on?",
    "Roast the worst movie everyone pretends to like",
    "What makes you lose faith in humanity daily?",
    "Destroy your most embarrassing moment",
    "What's the most toxic positivity you've heard?",
    "Rant about the worst type of social media post",
    "What childhood belief was complete garbage?",
    "Brutally critique your own appearance",
    "What's the most annoying thing about your generation?",
];

/// The challenge for a given calendar day.
///
/// Rotates by day of year (January 1st is day 1), so every date maps to the
/// same prompt no matter when it's asked.
pub fn challenge_for_date(date: NaiveDate) -> &'static str {
    let index = date.ordinal() as usize % BRUTAL_CHALLENGES.len();
    BRUTAL_CHALLENGES[index]
}

/// The challenge for today's UTC date.
pub fn todays_challenge() -> &'static str {
    challenge_for_date(chrono::Utc::now().date_naive())
}

pub fn random_challenge<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    BRUTAL_CHALLENGES
        .choose(rng)
        .copied()
        .unwrap_or(BRUTAL_CHALLENGES[0])
}
