use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::client::file::SelectedFile;
use crate::models::job::{MatchRequest, MatchResponse};
use crate::models::resume::UploadAck;
use crate::resumes::upload::FILE_FIELD;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("Request failed with status code {status}")]
    Status { status: u16 },

    #[error("Could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// The two calls the upload form makes, in order.
#[async_trait]
pub trait MatcherApi: Send + Sync {
    async fn upload_resume(&self, file: &SelectedFile) -> Result<UploadAck, ClientError>;

    async fn match_jobs(&self, resume_id: Option<&str>) -> Result<MatchResponse, ClientError>;
}

/// HTTP implementation of [`MatcherApi`] against a running API server.
/// No retries: a failed call is reported to the form as-is.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl MatcherApi for ApiClient {
    async fn upload_resume(&self, file: &SelectedFile) -> Result<UploadAck, ClientError> {
        let part = Part::bytes(file.bytes.to_vec())
            .file_name(file.name.clone())
            .mime_str(&file.content_type)?;
        let form = Form::new().part(FILE_FIELD, part);

        debug!("Uploading {} ({} bytes)", file.name, file.bytes.len());
        let response = self
            .client
            .post(self.url("/api/resumes/upload"))
            .multipart(form)
            .send()
            .await?;

        decode(response).await
    }

    async fn match_jobs(&self, resume_id: Option<&str>) -> Result<MatchResponse, ClientError> {
        let request = MatchRequest {
            resume_id: resume_id.map(str::to_string),
        };

        let response = self
            .client
            .post(self.url("/api/jobs/match"))
            .json(&request)
            .send()
            .await?;

        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        debug!("API returned {status}: {body}");
        return Err(ClientError::Status {
            status: status.as_u16(),
        });
    }

    Ok(response.json::<T>().await?)
}
