// POST /api/moderate — dry-run the moderation engine on a piece of text.
//
// Returns the raw verdict plus its badge tier. Nothing is stored and nothing
// lands in the Hall of Shame.

use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::moderation;
use crate::scoring::tier::RudenessTier;

#[derive(Deserialize)]
pub struct ModerateBody {
    pub content: String,
}

pub async fn moderate(Json(body): Json<ModerateBody>) -> impl IntoResponse {
    let verdict = moderation::moderate(body.content.trim());
    let tier = RudenessTier::from_score(verdict.rudeness_score);

    Json(serde_json::json!({
        "verdict": verdict,
        "tier": tier,
    }))
}
