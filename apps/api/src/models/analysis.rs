use serde::{Deserialize, Serialize};

/// Confidence reported by the skills stub.
pub const SKILLS_CONFIDENCE: f64 = 0.95;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillsAnalysis {
    pub skills: Vec<String>,
    pub confidence: f64,
}

impl Default for SkillsAnalysis {
    fn default() -> Self {
        Self {
            skills: Vec::new(),
            confidence: SKILLS_CONFIDENCE,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterviewPrep {
    pub questions: Vec<String>,
}
