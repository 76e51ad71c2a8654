// Rude responses — the snark returned alongside a too-polite rejection.

use rand::Rng;

/// The one template that doesn't name a flagged term.
const FALLBACK_RESPONSE: &str = "This is RudeShare, not your grandmother's tea party.";

const TEMPLATE_COUNT: usize = 5;

/// Pick a response template uniformly at random and fill in the first flagged term.
pub fn generate_rude_response(flagged_terms: &[String]) -> String {
    generate_rude_response_with(&mut rand::rng(), flagged_terms)
}

/// Same as `generate_rude_response`, drawing from a caller-supplied RNG.
///
/// With no flagged terms there is nothing to interpolate, so the generic
/// template is returned.
pub fn generate_rude_response_with<R: Rng + ?Sized>(rng: &mut R, flagged_terms: &[String]) -> String {
    let Some(term) = flagged_terms.first() else {
        return FALLBACK_RESPONSE.to_string();
    };

    match rng.random_range(0..TEMPLATE_COUNT) {
        0 => format!("Cut the {term} crap. This isn't kindergarten."),
        1 => format!("Nobody wants your fake {term} BS here."),
        2 => format!("Save your {term} garbage for Facebook."),
        3 => FALLBACK_RESPONSE.to_string(),
        _ => format!("Keep your soft {term} nonsense to yourself."),
    }
}
