//! Multipart intake for resume uploads. Content is streamed and dropped; only
//! the presence of a `file` part is checked. There is no size or type limit.

use axum::extract::multipart::{Multipart, MultipartError};

use crate::errors::AppError;

/// Name of the form part the web client sends the document in.
pub const FILE_FIELD: &str = "file";

/// What was seen of the uploaded file before it was discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceivedFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub size: usize,
}

/// Drains every part of the request chunk by chunk, keeping only byte counts.
/// Fails if no `file` part was present.
pub async fn drain_upload(multipart: &mut Multipart) -> Result<ReceivedFile, AppError> {
    let mut received: Option<ReceivedFile> = None;

    while let Some(mut field) = multipart.next_field().await.map_err(multipart_error)? {
        let is_file = field.name() == Some(FILE_FIELD);
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);

        let mut size = 0;
        while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
            size += chunk.len();
        }

        if is_file && received.is_none() {
            received = Some(ReceivedFile {
                file_name,
                content_type,
                size,
            });
        }
    }

    received.ok_or_else(|| AppError::Validation("No file uploaded".to_string()))
}

fn multipart_error(e: MultipartError) -> AppError {
    AppError::Validation(format!("Malformed multipart body: {}", e.body_text()))
}
