// Submission — the moderation gate in front of the board store.
//
// Every post and comment goes through here:
// 1. Basic validation (non-empty, length limits)
// 2. One call to `moderate`
// 3. Illegal content is rejected with its flagged terms
// 4. Too-polite content is rejected with a rude response and logged to
//    the Hall of Shame
// 5. Everything else is persisted with its rudeness score

use anyhow::Result;
use tracing::info;

use super::models::{Comment, NewComment, NewPost, PostView};
use super::traits::BoardStore;
use crate::moderation::{generate_rude_response, moderate, Severity};

/// Length limits for submitted text, in characters.
#[derive(Debug, Clone, Copy)]
pub struct SubmissionLimits {
    pub max_post_chars: usize,
    pub max_comment_chars: usize,
}

impl Default for SubmissionLimits {
    fn default() -> Self {
        Self {
            max_post_chars: 2000,
            max_comment_chars: 1000,
        }
    }
}

/// Why a submission was turned away. These are outcomes, not failures:
/// store errors travel separately through `anyhow::Result`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Failed basic validation (empty, too long)
    Invalid(String),
    /// Death threats or harassment
    Illegal { flagged_terms: Vec<String> },
    /// Two or more polite words or phrases
    TooPolite {
        flagged_terms: Vec<String>,
        rude_response: String,
    },
}

impl Rejection {
    pub fn message(&self, kind: &str) -> String {
        match self {
            Rejection::Invalid(message) => message.clone(),
            Rejection::Illegal { .. } => {
                "Content banned for legal reasons (death threats/harassment)".to_string()
            }
            Rejection::TooPolite { .. } => {
                format!("{kind} banned for being too polite. This is RudeShare!")
            }
        }
    }
}

pub type Submission<T> = std::result::Result<T, Rejection>;

/// Moderate and, if allowed, publish a post.
pub async fn submit_post(
    store: &dyn BoardStore,
    mut post: NewPost,
    ip: &str,
    limits: &SubmissionLimits,
) -> Result<Submission<PostView>> {
    post.content = post.content.trim().to_string();

    if post.content.is_empty() && post.media_url.is_none() {
        return Ok(Err(Rejection::Invalid(
            "Post must have content or media".to_string(),
        )));
    }
    if post.content.chars().count() > limits.max_post_chars {
        return Ok(Err(Rejection::Invalid(format!(
            "Post content too long (max {} characters)",
            limits.max_post_chars
        ))));
    }

    let rudeness_score = match gate(store, &post.content, ip).await? {
        Ok(score) => score,
        Err(rejection) => return Ok(Err(rejection)),
    };

    let challenge_response = post.challenge_response;
    let view = store.create_post(post, ip, rudeness_score).await?;

    if challenge_response {
        if let Some(challenge) = store.todays_challenge().await? {
            store.increment_challenge_responses(challenge.id).await?;
        }
    }

    info!(
        id = view.post.id,
        rudeness = rudeness_score,
        boosted = view.post.is_boosted,
        "Published post"
    );
    Ok(Ok(view))
}

/// Moderate and, if allowed, publish a comment.
pub async fn submit_comment(
    store: &dyn BoardStore,
    mut comment: NewComment,
    ip: &str,
    limits: &SubmissionLimits,
) -> Result<Submission<Comment>> {
    comment.content = comment.content.trim().to_string();

    if comment.content.is_empty() {
        return Ok(Err(Rejection::Invalid("Comment must have content".to_string())));
    }
    if comment.content.chars().count() > limits.max_comment_chars {
        return Ok(Err(Rejection::Invalid(format!(
            "Comment content too long (max {} characters)",
            limits.max_comment_chars
        ))));
    }

    let rudeness_score = match gate(store, &comment.content, ip).await? {
        Ok(score) => score,
        Err(rejection) => return Ok(Err(rejection)),
    };

    let comment = store.create_comment(comment, ip, rudeness_score).await?;
    info!(
        id = comment.id,
        post_id = comment.post_id,
        rudeness = rudeness_score,
        "Published comment"
    );
    Ok(Ok(comment))
}

/// Run the moderation engine and act on its verdict. Returns the rudeness
/// score to persist when the content is allowed.
async fn gate(store: &dyn BoardStore, content: &str, ip: &str) -> Result<Submission<u8>> {
    let verdict = moderate(content);

    match verdict.severity {
        Severity::BannedIllegal => {
            info!(
                severity = %verdict.severity,
                flagged = verdict.flagged_terms.len(),
                "Rejected submission"
            );
            Ok(Err(Rejection::Illegal {
                flagged_terms: verdict.flagged_terms,
            }))
        }
        Severity::BannedPolite => {
            let rude_response = generate_rude_response(&verdict.flagged_terms);
            store
                .record_banned_polite(content, &verdict.flagged_terms, &rude_response, ip)
                .await?;
            info!(
                severity = %verdict.severity,
                flagged = verdict.flagged_terms.len(),
                "Rejected submission, added to Hall of Shame"
            );
            Ok(Err(Rejection::TooPolite {
                flagged_terms: verdict.flagged_terms,
                rude_response,
            }))
        }
        Severity::Allowed => Ok(Ok(verdict.rudeness_score)),
    }
}
