use serde::{Deserialize, Serialize};

pub const UPLOAD_SUCCESS_MESSAGE: &str = "Resume uploaded successfully";
pub const RESUME_RETRIEVED_MESSAGE: &str = "Resume retrieved";

/// Acknowledgement for `POST /api/resumes/upload`.
/// `id` is part of the contract but the upload stub never assigns one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadAck {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl UploadAck {
    pub fn accepted() -> Self {
        Self {
            message: UPLOAD_SUCCESS_MESSAGE.to_string(),
            id: None,
        }
    }
}

/// Echo body for `GET /api/resumes/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeLookup {
    pub message: String,
    pub id: String,
}

impl ResumeLookup {
    pub fn echo(id: String) -> Self {
        Self {
            message: RESUME_RETRIEVED_MESSAGE.to_string(),
            id,
        }
    }
}
