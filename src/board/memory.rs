// MemoryStore — in-process BoardStore backed by plain maps.
//
// All state lives in one `Inner` behind a tokio Mutex. Trait methods lock,
// do synchronous map work, and return; the guard is never held across an
// .await. IDs are sequential per table, starting at 1.

use std::collections::{BTreeMap, HashSet};

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::models::{
    BannedPolitePost, Comment, CommentSort, CommentVote, DailyChallenge, NewComment, NewPost, Post,
    PostSort, PostView, Reaction, ReactionToggle, ReactionType, Report, Statistics, Vote, VoteType,
};
use super::traits::{BoardStore, NotFound};
use super::{generate_public_id, hash_ip};
use crate::scoring::brutality::brutality_percentage;
use crate::scoring::tier::is_boosted;

#[derive(Default)]
struct Inner {
    posts: BTreeMap<u64, Post>,
    votes: BTreeMap<u64, Vote>,
    reactions: BTreeMap<u64, Reaction>,
    reports: BTreeMap<u64, Report>,
    banned_polite: BTreeMap<u64, BannedPolitePost>,
    challenges: BTreeMap<u64, DailyChallenge>,
    comments: BTreeMap<u64, Comment>,
    comment_votes: BTreeMap<u64, CommentVote>,
    next_post_id: u64,
    next_vote_id: u64,
    next_reaction_id: u64,
    next_report_id: u64,
    next_banned_id: u64,
    next_challenge_id: u64,
    next_comment_id: u64,
    next_comment_vote_id: u64,
}

/// Bump a sequential ID counter and return the new ID.
fn next_id(counter: &mut u64) -> u64 {
    *counter += 1;
    *counter
}

impl Inner {
    fn require_post(&self, post_id: u64) -> Result<()> {
        if self.posts.contains_key(&post_id) {
            Ok(())
        } else {
            Err(NotFound::Post(post_id).into())
        }
    }

    fn reaction_counts(&self, post_id: u64) -> BTreeMap<ReactionType, u32> {
        let mut counts = BTreeMap::new();
        for reaction in self.reactions.values().filter(|r| r.post_id == post_id) {
            *counts.entry(reaction.reaction_type).or_insert(0) += 1;
        }
        counts
    }

    fn view(&self, post: &Post) -> PostView {
        let reactions = self.reaction_counts(post.id);
        let brutality = brutality_percentage(post.rudeness_score, &reactions);
        let comment_count = self
            .comments
            .values()
            .filter(|c| c.post_id == post.id)
            .count();
        PostView {
            post: post.clone(),
            reactions,
            brutality_percentage: brutality,
            comment_count,
        }
    }

    /// Seed today's challenge if there isn't an active one for the date yet.
    fn ensure_todays_challenge(&mut self, now: DateTime<Utc>) -> DailyChallenge {
        let today = now.date_naive();
        if let Some(existing) = self
            .challenges
            .values()
            .find(|c| c.date == today && c.is_active)
        {
            return existing.clone();
        }

        let challenge = DailyChallenge {
            id: next_id(&mut self.next_challenge_id),
            prompt: crate::challenge::challenge_for_date(today).to_string(),
            date: today,
            is_active: true,
            response_count: 0,
            created_at: now,
        };
        self.challenges.insert(challenge.id, challenge.clone());
        challenge
    }
}

pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Create an empty board with today's challenge already seeded.
    pub fn new() -> Self {
        let mut inner = Inner::default();
        inner.ensure_todays_challenge(Utc::now());
        Self {
            inner: Mutex::new(inner),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn sort_posts(views: &mut [PostView], sort: PostSort) {
    match sort {
        PostSort::Newest => views.sort_by(|a, b| {
            (b.post.created_at, b.post.id).cmp(&(a.post.created_at, a.post.id))
        }),
        PostSort::Oldest => views.sort_by(|a, b| {
            (a.post.created_at, a.post.id).cmp(&(b.post.created_at, b.post.id))
        }),
        PostSort::Popular => views.sort_by(|a, b| b.post.score.cmp(&a.post.score)),
        PostSort::Controversial => views.sort_by(|a, b| {
            let total = |v: &PostView| v.reactions.values().sum::<u32>();
            total(b).cmp(&total(a))
        }),
    }
}

#[async_trait]
impl BoardStore for MemoryStore {
    async fn list_posts(&self, sort: PostSort) -> Result<Vec<PostView>> {
        let inner = self.inner.lock().await;
        let mut views: Vec<PostView> = inner.posts.values().map(|p| inner.view(p)).collect();
        sort_posts(&mut views, sort);
        Ok(views)
    }

    async fn get_post(&self, id: u64) -> Result<Option<PostView>> {
        let inner = self.inner.lock().await;
        Ok(inner.posts.get(&id).map(|p| inner.view(p)))
    }

    async fn create_post(&self, post: NewPost, _ip: &str, rudeness_score: u8) -> Result<PostView> {
        let mut inner = self.inner.lock().await;
        let post = Post {
            id: next_id(&mut inner.next_post_id),
            public_id: generate_public_id("#"),
            content: post.content,
            score: 0,
            report_count: 0,
            media_url: post.media_url,
            media_type: post.media_type,
            rudeness_score,
            is_boosted: is_boosted(rudeness_score),
            challenge_response: post.challenge_response,
            created_at: Utc::now(),
        };
        debug!(id = post.id, public_id = %post.public_id, "Stored post");
        inner.posts.insert(post.id, post.clone());
        Ok(inner.view(&post))
    }

    async fn search_posts(&self, query: &str) -> Result<Vec<PostView>> {
        let query = query.to_lowercase();
        let inner = self.inner.lock().await;
        let mut views: Vec<PostView> = inner
            .posts
            .values()
            .filter(|p| {
                p.content.to_lowercase().contains(&query)
                    || p.public_id.to_lowercase().contains(&query)
            })
            .map(|p| inner.view(p))
            .collect();
        sort_posts(&mut views, PostSort::Newest);
        Ok(views)
    }

    async fn cleanup_old_posts(&self, retention: Duration) -> Result<usize> {
        let cutoff = Utc::now() - retention;
        let mut inner = self.inner.lock().await;

        let stale: HashSet<u64> = inner
            .posts
            .values()
            .filter(|p| p.created_at < cutoff && p.score == 0)
            .map(|p| p.id)
            .collect();

        if stale.is_empty() {
            return Ok(0);
        }

        let stale_comments: HashSet<u64> = inner
            .comments
            .values()
            .filter(|c| stale.contains(&c.post_id))
            .map(|c| c.id)
            .collect();

        inner.posts.retain(|id, _| !stale.contains(id));
        inner.votes.retain(|_, v| !stale.contains(&v.post_id));
        inner.reactions.retain(|_, r| !stale.contains(&r.post_id));
        inner.reports.retain(|_, r| !stale.contains(&r.post_id));
        inner.comments.retain(|id, _| !stale_comments.contains(id));
        inner
            .comment_votes
            .retain(|_, v| !stale_comments.contains(&v.comment_id));

        info!(
            posts = stale.len(),
            comments = stale_comments.len(),
            "Cleaned up stale posts"
        );
        Ok(stale.len())
    }

    async fn create_vote(&self, post_id: u64, vote_type: VoteType, ip: &str) -> Result<Option<Vote>> {
        let ip_hash = hash_ip(ip);
        let mut inner = self.inner.lock().await;
        inner.require_post(post_id)?;

        if inner
            .votes
            .values()
            .any(|v| v.post_id == post_id && v.ip_hash == ip_hash)
        {
            return Ok(None);
        }

        let vote = Vote {
            id: next_id(&mut inner.next_vote_id),
            post_id,
            vote_type,
            ip_hash,
            created_at: Utc::now(),
        };
        inner.votes.insert(vote.id, vote.clone());

        if let Some(post) = inner.posts.get_mut(&post_id) {
            post.score += vote_type.delta();
        }

        Ok(Some(vote))
    }

    async fn toggle_reaction(
        &self,
        post_id: u64,
        reaction_type: ReactionType,
        ip: &str,
    ) -> Result<ReactionToggle> {
        let ip_hash = hash_ip(ip);
        let mut inner = self.inner.lock().await;
        inner.require_post(post_id)?;

        let existing = inner
            .reactions
            .values()
            .find(|r| {
                r.post_id == post_id && r.reaction_type == reaction_type && r.ip_hash == ip_hash
            })
            .map(|r| r.id);

        if let Some(id) = existing {
            inner.reactions.remove(&id);
            return Ok(ReactionToggle::Removed(reaction_type));
        }

        let reaction = Reaction {
            id: next_id(&mut inner.next_reaction_id),
            post_id,
            reaction_type,
            ip_hash,
            created_at: Utc::now(),
        };
        inner.reactions.insert(reaction.id, reaction.clone());
        Ok(ReactionToggle::Added(reaction))
    }

    async fn create_report(&self, post_id: u64, reason: Option<String>, ip: &str) -> Result<Report> {
        let ip_hash = hash_ip(ip);
        let mut inner = self.inner.lock().await;
        inner.require_post(post_id)?;

        let report = Report {
            id: next_id(&mut inner.next_report_id),
            post_id,
            reason,
            ip_hash,
            created_at: Utc::now(),
        };
        inner.reports.insert(report.id, report.clone());

        if let Some(post) = inner.posts.get_mut(&post_id) {
            post.report_count += 1;
        }

        Ok(report)
    }

    async fn record_banned_polite(
        &self,
        content: &str,
        flagged_terms: &[String],
        rude_response: &str,
        ip: &str,
    ) -> Result<BannedPolitePost> {
        let ip_hash = hash_ip(ip);
        let mut inner = self.inner.lock().await;

        let entry = BannedPolitePost {
            id: next_id(&mut inner.next_banned_id),
            content: content.to_string(),
            flagged_terms: flagged_terms.to_vec(),
            rude_response: rude_response.to_string(),
            ip_hash,
            created_at: Utc::now(),
        };
        inner.banned_polite.insert(entry.id, entry.clone());
        Ok(entry)
    }

    async fn hall_of_shame(&self, limit: usize) -> Result<Vec<BannedPolitePost>> {
        let inner = self.inner.lock().await;
        let mut entries: Vec<BannedPolitePost> = inner.banned_polite.values().cloned().collect();
        entries.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        entries.truncate(limit);
        Ok(entries)
    }

    async fn list_comments(&self, post_id: u64, sort: CommentSort) -> Result<Vec<Comment>> {
        let inner = self.inner.lock().await;
        let mut comments: Vec<Comment> = inner
            .comments
            .values()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();

        match sort {
            CommentSort::Newest => {
                comments.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)))
            }
            CommentSort::Oldest => {
                comments.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)))
            }
            CommentSort::Popular => comments.sort_by(|a, b| b.score.cmp(&a.score)),
        }

        Ok(comments)
    }

    async fn create_comment(
        &self,
        comment: NewComment,
        _ip: &str,
        rudeness_score: u8,
    ) -> Result<Comment> {
        let mut inner = self.inner.lock().await;
        inner.require_post(comment.post_id)?;

        let comment = Comment {
            id: next_id(&mut inner.next_comment_id),
            post_id: comment.post_id,
            public_id: generate_public_id("#C"),
            content: comment.content,
            score: 0,
            rudeness_score,
            created_at: Utc::now(),
        };
        inner.comments.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn create_comment_vote(
        &self,
        comment_id: u64,
        vote_type: VoteType,
        ip: &str,
    ) -> Result<Option<CommentVote>> {
        let ip_hash = hash_ip(ip);
        let mut inner = self.inner.lock().await;
        if !inner.comments.contains_key(&comment_id) {
            return Err(NotFound::Comment(comment_id).into());
        }

        if inner
            .comment_votes
            .values()
            .any(|v| v.comment_id == comment_id && v.ip_hash == ip_hash)
        {
            return Ok(None);
        }

        let vote = CommentVote {
            id: next_id(&mut inner.next_comment_vote_id),
            comment_id,
            vote_type,
            ip_hash,
            created_at: Utc::now(),
        };
        inner.comment_votes.insert(vote.id, vote.clone());

        if let Some(comment) = inner.comments.get_mut(&comment_id) {
            comment.score += vote_type.delta();
        }

        Ok(Some(vote))
    }

    async fn todays_challenge(&self) -> Result<Option<DailyChallenge>> {
        let mut inner = self.inner.lock().await;
        // The board may outlive the day it was created on
        Ok(Some(inner.ensure_todays_challenge(Utc::now())))
    }

    async fn increment_challenge_responses(&self, challenge_id: u64) -> Result<()> {
        let mut inner = self.inner.lock().await;
        if let Some(challenge) = inner.challenges.get_mut(&challenge_id) {
            challenge.response_count += 1;
        }
        Ok(())
    }

    async fn statistics(&self) -> Result<Statistics> {
        let now = Utc::now();
        let inner = self.inner.lock().await;

        let start_of_day = now
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .map(|t| t.and_utc())
            .unwrap_or(now);
        let posts_today = inner
            .posts
            .values()
            .filter(|p| p.created_at >= start_of_day)
            .count();

        let hour_ago = now - Duration::hours(1);
        let active: HashSet<&str> = inner
            .votes
            .values()
            .filter(|v| v.created_at >= hour_ago)
            .map(|v| v.ip_hash.as_str())
            .chain(
                inner
                    .reactions
                    .values()
                    .filter(|r| r.created_at >= hour_ago)
                    .map(|r| r.ip_hash.as_str()),
            )
            .chain(
                inner
                    .comment_votes
                    .values()
                    .filter(|v| v.created_at >= hour_ago)
                    .map(|v| v.ip_hash.as_str()),
            )
            .collect();

        let avg_rudeness_score = if inner.posts.is_empty() {
            0
        } else {
            let total: u64 = inner.posts.values().map(|p| p.rudeness_score as u64).sum();
            (total as f64 / inner.posts.len() as f64).round() as u8
        };

        Ok(Statistics {
            total_posts: inner.posts.len(),
            posts_today,
            active_users: active.len(),
            avg_rudeness_score,
            banned_polite_count: inner.banned_polite.len(),
            total_comments: inner.comments.len(),
        })
    }
}
