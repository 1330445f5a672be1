use axum::{extract::rejection::JsonRejection, Json};
use tracing::debug;

use crate::models::job::{MatchRequest, MatchResponse};

/// POST /api/jobs/match
/// The body is optional: a missing or unparsable request is treated as no resume id.
pub async fn handle_match(body: Result<Json<MatchRequest>, JsonRejection>) -> Json<MatchResponse> {
    let request = body.map(|Json(req)| req).unwrap_or_default();
    debug!(resume_id = ?request.resume_id, "Job match requested");

    Json(MatchResponse::empty())
}
