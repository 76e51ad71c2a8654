// Board store trait — backend-agnostic async interface for board state.
//
// Implementors: MemoryStore (tokio Mutex around plain maps). All methods are
// async so a future networked backend fits behind the same interface without
// touching the submission service or the web handlers.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Duration;

use super::models::{
    BannedPolitePost, Comment, CommentSort, CommentVote, DailyChallenge, NewComment, NewPost,
    PostSort, PostView, ReactionToggle, ReactionType, Report, Statistics, Vote, VoteType,
};

/// A write aimed at a post or comment that isn't on the board.
///
/// Stores return this inside `anyhow::Error` so the existence check happens
/// under the same lock as the write; callers `downcast_ref` to tell it apart
/// from a backend failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFound {
    Post(u64),
    Comment(u64),
}

impl std::fmt::Display for NotFound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotFound::Post(_) => write!(f, "Post not found"),
            NotFound::Comment(_) => write!(f, "Comment not found"),
        }
    }
}

impl std::error::Error for NotFound {}

#[async_trait]
pub trait BoardStore: Send + Sync {
    // --- Posts ---

    /// All posts with reactions, brutality, and comment counts, in `sort` order.
    async fn list_posts(&self, sort: PostSort) -> Result<Vec<PostView>>;

    async fn get_post(&self, id: u64) -> Result<Option<PostView>>;

    /// Persist an already-moderated post with its rudeness score.
    async fn create_post(&self, post: NewPost, ip: &str, rudeness_score: u8) -> Result<PostView>;

    /// Case-insensitive substring search over content and public IDs, newest first.
    async fn search_posts(&self, query: &str) -> Result<Vec<PostView>>;

    /// Delete posts older than `retention` that never got a vote, along with
    /// everything attached to them. Returns how many posts were removed.
    async fn cleanup_old_posts(&self, retention: Duration) -> Result<usize>;

    // --- Votes, reactions, reports ---

    /// Record a vote. Returns `None` if this IP already voted on the post.
    /// Fails with `NotFound::Post` if there is no such post.
    async fn create_vote(&self, post_id: u64, vote_type: VoteType, ip: &str) -> Result<Option<Vote>>;

    /// Add a reaction, or remove it if this IP already gave the same one.
    /// Fails with `NotFound::Post` if there is no such post.
    async fn toggle_reaction(
        &self,
        post_id: u64,
        reaction_type: ReactionType,
        ip: &str,
    ) -> Result<ReactionToggle>;

    /// Fails with `NotFound::Post` if there is no such post.
    async fn create_report(&self, post_id: u64, reason: Option<String>, ip: &str) -> Result<Report>;

    // --- Hall of Shame ---

    async fn record_banned_polite(
        &self,
        content: &str,
        flagged_terms: &[String],
        rude_response: &str,
        ip: &str,
    ) -> Result<BannedPolitePost>;

    /// Most recent Hall of Shame entries, newest first.
    async fn hall_of_shame(&self, limit: usize) -> Result<Vec<BannedPolitePost>>;

    // --- Comments ---

    async fn list_comments(&self, post_id: u64, sort: CommentSort) -> Result<Vec<Comment>>;

    /// Fails with `NotFound::Post` if the comment's post is gone.
    async fn create_comment(&self, comment: NewComment, ip: &str, rudeness_score: u8) -> Result<Comment>;

    /// Record a comment vote. Returns `None` if this IP already voted on the
    /// comment; fails with `NotFound::Comment` if there is no such comment.
    async fn create_comment_vote(
        &self,
        comment_id: u64,
        vote_type: VoteType,
        ip: &str,
    ) -> Result<Option<CommentVote>>;

    // --- Daily challenge ---

    async fn todays_challenge(&self) -> Result<Option<DailyChallenge>>;

    async fn increment_challenge_responses(&self, challenge_id: u64) -> Result<()>;

    // --- Statistics ---

    async fn statistics(&self) -> Result<Statistics>;
}
