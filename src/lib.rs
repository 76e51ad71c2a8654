// RudeShare: the anonymous board that bans politeness.
//
// This is the library root. `moderation` is the engine everything else
// calls into; the remaining modules are the board built around it.

pub mod board;
pub mod challenge;
pub mod config;
pub mod moderation;
pub mod output;
pub mod scoring;

#[cfg(feature = "web")]
pub mod web;
