use serde::{Deserialize, Serialize};

pub const MATCH_RESULTS_MESSAGE: &str = "Job matching results";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_id: Option<String>,
}

/// A job-to-resume pairing as rendered by the client's match grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatch {
    pub title: String,
    pub company: String,
    pub location: String,
    pub match_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResponse {
    pub message: String,
    pub matches: Vec<JobMatch>,
}

impl MatchResponse {
    pub fn empty() -> Self {
        Self {
            message: MATCH_RESULTS_MESSAGE.to_string(),
            matches: Vec::new(),
        }
    }
}
