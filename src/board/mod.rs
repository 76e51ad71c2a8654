// Board — posts, comments, votes, reactions, and the Hall of Shame.
//
// The store is a thin collaborator of the moderation engine: `submission`
// runs every post and comment through `moderate` before anything reaches a
// BoardStore, and persists the verdict's rudeness score verbatim.
//
// There are no accounts. The only notion of identity is a SHA-256 hash of
// the client IP, used to stop double votes and reactions.

pub mod memory;
pub mod models;
pub mod submission;
pub mod traits;

pub use memory::MemoryStore;
pub use traits::{BoardStore, NotFound};

use rand::Rng;
use sha2::{Digest, Sha256};

const PUBLIC_ID_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const PUBLIC_ID_LEN: usize = 6;

/// Hex-encoded SHA-256 of a client IP. Raw IPs are never stored.
pub fn hash_ip(ip: &str) -> String {
    hex::encode(Sha256::digest(ip.as_bytes()))
}

/// Random anonymous handle: `prefix` followed by six uppercase alphanumerics.
pub fn generate_public_id(prefix: &str) -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..PUBLIC_ID_LEN)
        .map(|_| PUBLIC_ID_CHARSET[rng.random_range(0..PUBLIC_ID_CHARSET.len())] as char)
        .collect();
    format!("{prefix}{suffix}")
}
