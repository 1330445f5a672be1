use std::fmt::Write;

use crate::client::api::{ClientError, MatcherApi};
use crate::client::file::SelectedFile;
use crate::models::job::JobMatch;

pub const MISSING_FILE_MESSAGE: &str = "Please select a file";
const ERROR_PREFIX: &str = "Error processing resume: ";

/// State of the resume upload form.
///
/// Submitting runs two calls in sequence: upload the file, then request
/// matches for whatever id the upload acknowledged (currently none).
#[derive(Debug, Default)]
pub struct UploadForm {
    pub file: Option<SelectedFile>,
    pub matches: Vec<JobMatch>,
    pub loading: bool,
    pub error: Option<String>,
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_file(&mut self, file: SelectedFile) {
        self.file = Some(file);
    }

    pub async fn submit(&mut self, api: &dyn MatcherApi) {
        let Some(file) = self.file.clone() else {
            self.error = Some(MISSING_FILE_MESSAGE.to_string());
            return;
        };

        self.loading = true;
        self.error = None;

        match fetch_matches(api, &file).await {
            Ok(matches) => self.matches = matches,
            Err(e) => {
                tracing::warn!("Resume submission failed: {e}");
                self.error = Some(format!("{ERROR_PREFIX}{e}"));
            }
        }

        self.loading = false;
    }

    pub fn status_line(&self) -> Option<String> {
        self.file.as_ref().map(|f| format!("Selected: {}", f.name))
    }

    /// Renders the match grid in list order. Empty when there are no matches.
    pub fn render_matches(&self) -> String {
        if self.matches.is_empty() {
            return String::new();
        }

        let mut out = String::from("Job Matches\n");
        for m in &self.matches {
            let _ = write!(
                out,
                "\n{}\n{}\n{}  {}% Match\n",
                m.title, m.company, m.location, m.match_percentage
            );
        }
        out
    }
}

async fn fetch_matches(
    api: &dyn MatcherApi,
    file: &SelectedFile,
) -> Result<Vec<JobMatch>, ClientError> {
    let ack = api.upload_resume(file).await?;
    let response = api.match_jobs(ack.id.as_deref()).await?;
    Ok(response.matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::models::job::MatchResponse;
    use crate::models::resume::UploadAck;

    /// Scripted API: counts calls and either succeeds or fails each step.
    #[derive(Default)]
    struct FakeApi {
        fail_upload: bool,
        fail_match: bool,
        matches: Vec<JobMatch>,
        upload_calls: AtomicUsize,
        match_calls: AtomicUsize,
    }

    fn unavailable() -> ClientError {
        ClientError::Status { status: 503 }
    }

    #[async_trait]
    impl MatcherApi for FakeApi {
        async fn upload_resume(&self, _file: &SelectedFile) -> Result<UploadAck, ClientError> {
            self.upload_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_upload {
                return Err(unavailable());
            }
            Ok(UploadAck::accepted())
        }

        async fn match_jobs(&self, resume_id: Option<&str>) -> Result<MatchResponse, ClientError> {
            self.match_calls.fetch_add(1, Ordering::SeqCst);
            assert!(resume_id.is_none(), "upload stub never assigns an id");
            if self.fail_match {
                return Err(unavailable());
            }
            Ok(MatchResponse {
                matches: self.matches.clone(),
                ..MatchResponse::empty()
            })
        }
    }

    fn resume() -> SelectedFile {
        SelectedFile::new("resume.pdf", b"%PDF-1.4".to_vec())
    }

    fn job(title: &str, pct: f64) -> JobMatch {
        JobMatch {
            title: title.to_string(),
            company: "Acme".to_string(),
            location: "Berlin".to_string(),
            match_percentage: pct,
        }
    }

    #[tokio::test]
    async fn test_submit_without_file_makes_no_calls() {
        let api = FakeApi::default();
        let mut form = UploadForm::new();

        form.submit(&api).await;

        assert_eq!(form.error.as_deref(), Some("Please select a file"));
        assert!(!form.loading);
        assert_eq!(api.upload_calls.load(Ordering::SeqCst), 0);
        assert_eq!(api.match_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_successful_submit_renders_empty_grid() {
        let api = FakeApi::default();
        let mut form = UploadForm::new();
        form.select_file(resume());

        form.submit(&api).await;

        assert!(form.error.is_none());
        assert!(!form.loading);
        assert!(form.matches.is_empty());
        assert_eq!(form.render_matches(), "");
        assert_eq!(api.upload_calls.load(Ordering::SeqCst), 1);
        assert_eq!(api.match_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_upload_failure_sets_error_and_skips_match() {
        let api = FakeApi {
            fail_upload: true,
            ..FakeApi::default()
        };
        let mut form = UploadForm::new();
        form.select_file(resume());

        form.submit(&api).await;

        assert_eq!(
            form.error.as_deref(),
            Some("Error processing resume: Request failed with status code 503")
        );
        assert!(form.matches.is_empty());
        assert!(!form.loading);
        assert_eq!(api.match_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_match_failure_keeps_previous_matches() {
        let mut form = UploadForm::new();
        form.select_file(resume());
        form.matches = vec![job("Old result", 40.0)];

        let api = FakeApi {
            fail_match: true,
            ..FakeApi::default()
        };
        form.submit(&api).await;

        assert!(form.error.as_deref().unwrap().starts_with("Error processing resume:"));
        assert_eq!(form.matches, vec![job("Old result", 40.0)]);
    }

    #[tokio::test]
    async fn test_resubmit_clears_previous_error() {
        let mut form = UploadForm::new();
        form.submit(&FakeApi::default()).await;
        assert!(form.error.is_some());

        form.select_file(resume());
        form.submit(&FakeApi::default()).await;
        assert!(form.error.is_none());
    }

    #[test]
    fn test_render_matches_in_order() {
        let form = UploadForm {
            matches: vec![job("Rust Engineer", 92.0), job("Data Engineer", 67.5)],
            ..UploadForm::default()
        };

        let grid = form.render_matches();
        assert!(grid.starts_with("Job Matches\n"));
        let rust = grid.find("Rust Engineer").unwrap();
        let data = grid.find("Data Engineer").unwrap();
        assert!(rust < data);
        assert!(grid.contains("Berlin  92% Match"));
        assert!(grid.contains("67.5% Match"));
    }

    #[test]
    fn test_status_line_names_selected_file() {
        let mut form = UploadForm::new();
        assert_eq!(form.status_line(), None);

        form.select_file(resume());
        assert_eq!(form.status_line().as_deref(), Some("Selected: resume.pdf"));
    }
}
