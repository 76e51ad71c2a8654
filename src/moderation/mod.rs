// Content moderation — the classification and rudeness scoring engine.
//
// Everything in here is pure: no I/O, no shared mutable state. The board
// calls `moderate` once per submitted post or comment and persists the
// verdict it gets back verbatim.

pub mod engine;
pub mod lexicon;
pub mod response;
pub mod verdict;

pub use engine::{moderate, rudeness_score};
pub use response::{generate_rude_response, generate_rude_response_with};
pub use verdict::{ModerationVerdict, Severity};
