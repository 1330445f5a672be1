use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const HEALTHY_STATUS: &str = "Server is running";

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

/// GET /api/health
/// Returns a status string and the current server time.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTHY_STATUS.to_string(),
        timestamp: Utc::now(),
    })
}
