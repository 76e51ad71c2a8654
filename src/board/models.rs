// Board models — the entities the store keeps and the API serves.
//
// These are kept apart from the store implementation so the scoring and web
// modules can use them without depending on how they're persisted.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A published post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    /// Anonymous public handle like `#A7B9C2`
    pub public_id: String,
    pub content: String,
    /// Net votes (up minus down)
    pub score: i64,
    pub report_count: u32,
    pub media_url: Option<String>,
    /// `image` or `video`; the board never inspects the media itself
    pub media_type: Option<String>,
    pub rudeness_score: u8,
    pub is_boosted: bool,
    pub challenge_response: bool,
    pub created_at: DateTime<Utc>,
}

/// A post with its derived engagement data, as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    #[serde(flatten)]
    pub post: Post,
    pub reactions: BTreeMap<ReactionType, u32>,
    pub brutality_percentage: u8,
    pub comment_count: usize,
}

/// What a client submits to create a post.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub content: String,
    pub media_url: Option<String>,
    pub media_type: Option<String>,
    #[serde(default)]
    pub challenge_response: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub post_id: u64,
    /// Anonymous public handle like `#CA7B9C2`
    pub public_id: String,
    pub content: String,
    pub score: i64,
    pub rudeness_score: u8,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub post_id: u64,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
    Up,
    Down,
}

impl VoteType {
    /// Score change this vote applies to its target.
    pub fn delta(&self) -> i64 {
        match self {
            VoteType::Up => 1,
            VoteType::Down => -1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub id: u64,
    pub post_id: u64,
    pub vote_type: VoteType,
    pub ip_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentVote {
    pub id: u64,
    pub comment_id: u64,
    pub vote_type: VoteType,
    pub ip_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Reactions a reader can attach to a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactionType {
    Savage,
    Brutal,
    MiddleFinger,
    Legendary,
    Trash,
    Boring,
}

impl ReactionType {
    pub const ALL: [ReactionType; 6] = [
        ReactionType::Savage,
        ReactionType::Brutal,
        ReactionType::MiddleFinger,
        ReactionType::Legendary,
        ReactionType::Trash,
        ReactionType::Boring,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReactionType::Savage => "savage",
            ReactionType::Brutal => "brutal",
            ReactionType::MiddleFinger => "middle_finger",
            ReactionType::Legendary => "legendary",
            ReactionType::Trash => "trash",
            ReactionType::Boring => "boring",
        }
    }
}

impl std::fmt::Display for ReactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reaction {
    pub id: u64,
    pub post_id: u64,
    pub reaction_type: ReactionType,
    pub ip_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Result of toggling a reaction: the same IP reacting twice with the same
/// type takes the reaction back.
#[derive(Debug, Clone)]
pub enum ReactionToggle {
    Added(Reaction),
    Removed(ReactionType),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: u64,
    pub post_id: u64,
    pub reason: Option<String>,
    pub ip_hash: String,
    pub created_at: DateTime<Utc>,
}

/// A Hall of Shame entry: content rejected for being too polite.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannedPolitePost {
    pub id: u64,
    pub content: String,
    pub flagged_terms: Vec<String>,
    pub rude_response: String,
    pub ip_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyChallenge {
    pub id: u64,
    pub prompt: String,
    pub date: NaiveDate,
    pub is_active: bool,
    pub response_count: u32,
    pub created_at: DateTime<Utc>,
}

/// Board-wide counters for the dashboard header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_posts: usize,
    pub posts_today: usize,
    /// Distinct IP hashes that voted or reacted in the last hour
    pub active_users: usize,
    pub avg_rudeness_score: u8,
    pub banned_polite_count: usize,
    pub total_comments: usize,
}

/// Post list ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostSort {
    #[default]
    Newest,
    Oldest,
    Popular,
    /// Most reactions first
    Controversial,
}

/// Comment list ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentSort {
    #[default]
    Newest,
    Oldest,
    Popular,
}
