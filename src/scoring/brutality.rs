// Brutality percentage — a post's rudeness adjusted by how readers reacted.
//
// Approving reactions (savage, brutal, ...) push the percentage up, dismissive
// ones (trash, boring) pull it down. The result is clamped to 0-100.

use std::collections::BTreeMap;

use crate::board::models::ReactionType;

/// Points each reaction adds to (or removes from) the brutality percentage.
pub fn reaction_weight(reaction: ReactionType) -> i64 {
    match reaction {
        ReactionType::Savage => 20,
        ReactionType::Brutal => 18,
        ReactionType::MiddleFinger => 15,
        ReactionType::Legendary => 12,
        ReactionType::Trash => -5,
        ReactionType::Boring => -10,
    }
}

/// Combine a post's rudeness score with its reaction counts.
pub fn brutality_percentage(rudeness_score: u8, reactions: &BTreeMap<ReactionType, u32>) -> u8 {
    let adjustment: i64 = reactions
        .iter()
        .map(|(&reaction, &count)| reaction_weight(reaction) * count as i64)
        .sum();

    (rudeness_score as i64 + adjustment).clamp(0, 100) as u8
}
