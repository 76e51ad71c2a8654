pub mod challenge;
pub mod comments;
pub mod moderation;
pub mod posts;
pub mod shame;
pub mod stats;
