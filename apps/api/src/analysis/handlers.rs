use axum::Json;

use crate::models::analysis::{InterviewPrep, SkillsAnalysis};

/// POST /api/analysis/skills
pub async fn handle_skills() -> Json<SkillsAnalysis> {
    Json(SkillsAnalysis::default())
}

/// POST /api/analysis/interview-prep
pub async fn handle_interview_prep() -> Json<InterviewPrep> {
    Json(InterviewPrep::default())
}
