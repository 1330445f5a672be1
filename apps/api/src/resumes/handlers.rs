use axum::{
    extract::{multipart::MultipartRejection, Multipart, Path},
    Json,
};
use tracing::debug;

use crate::errors::AppError;
use crate::models::resume::{ResumeLookup, UploadAck};
use crate::resumes::upload::drain_upload;

/// POST /api/resumes/upload
pub async fn handle_upload(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadAck>, AppError> {
    let mut multipart =
        multipart.map_err(|e| AppError::Validation(format!("Expected a multipart form: {e}")))?;

    let received = drain_upload(&mut multipart).await?;
    debug!(
        file_name = received.file_name.as_deref().unwrap_or("<unnamed>"),
        content_type = received.content_type.as_deref().unwrap_or("<none>"),
        size = received.size,
        "Resume upload received and discarded"
    );

    Ok(Json(UploadAck::accepted()))
}

/// GET /api/resumes/:id
pub async fn handle_get_resume(Path(id): Path<String>) -> Json<ResumeLookup> {
    Json(ResumeLookup::echo(id))
}
