// Output formatting — terminal display for moderation verdicts and challenges.

pub mod terminal;

/// Shorten `text` to `max_chars` characters for a one-line header, adding "..."
/// when anything was cut. Counts chars, so emoji in a rant never split.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
