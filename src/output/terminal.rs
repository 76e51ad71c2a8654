// Colored terminal output for moderation verdicts and challenges.

use colored::Colorize;

use crate::moderation::{ModerationVerdict, Severity};
use crate::scoring::tier::{is_boosted, RudenessTier};

/// Display a moderation verdict for `content` in the terminal.
pub fn display_verdict(content: &str, verdict: &ModerationVerdict) {
    println!(
        "\n{}",
        format!("=== Verdict: \"{}\" ===", super::truncate_chars(content, 60)).bold()
    );

    println!("  Severity: {}", colorize_severity(verdict.severity));

    if verdict.is_death_threat {
        println!("  {} death-threat terms found", "!!".red().bold());
    }
    if verdict.is_harassment {
        println!("  {} harassment terms found", "!!".red().bold());
    }

    if !verdict.flagged_terms.is_empty() {
        let terms: Vec<String> = verdict
            .flagged_terms
            .iter()
            .map(|t| format!("\"{t}\""))
            .collect();
        println!("  Flagged: {}", terms.join(", ").dimmed());
    }

    if verdict.severity == Severity::BannedIllegal {
        return;
    }

    let tier = RudenessTier::from_score(verdict.rudeness_score);
    println!(
        "  Rudeness: {}/100  {}",
        verdict.rudeness_score,
        colorize_tier(tier)
    );
    if is_boosted(verdict.rudeness_score) {
        println!("  {}", "BOOSTED".yellow().bold());
    }
}

/// Display the rude response attached to a too-polite rejection.
pub fn display_rude_response(response: &str) {
    println!("\n  {} {}", ">>".red(), response.italic());
}

pub fn display_challenge(prompt: &str) {
    println!("\n{}", "=== Today's Brutal Challenge ===".bold());
    println!("  {}", prompt.bright_red());
}

fn colorize_severity(severity: Severity) -> colored::ColoredString {
    match severity {
        Severity::Allowed => severity.as_str().green(),
        Severity::BannedPolite => severity.as_str().yellow().bold(),
        Severity::BannedIllegal => severity.as_str().red().bold(),
    }
}

/// Colorize a rudeness tier the way the board badges do.
fn colorize_tier(tier: RudenessTier) -> colored::ColoredString {
    match tier {
        RudenessTier::Savage => tier.as_str().red().bold(),
        RudenessTier::Harsh => tier.as_str().bright_red(),
        RudenessTier::Spicy => tier.as_str().yellow(),
        RudenessTier::Mild => tier.as_str().normal(),
        RudenessTier::None => tier.as_str().dimmed(),
    }
}
