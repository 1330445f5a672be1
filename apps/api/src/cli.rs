use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::client::api::DEFAULT_API_URL;
use crate::client::{ApiClient, SelectedFile, UploadForm};

#[derive(Debug, Parser)]
#[command(name = "aijobmatcher", version, about = "Smart Resume Analysis & Job Matching")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP API (default)
    Serve,
    /// Upload a resume to a running API and print the job matches
    Analyze {
        /// Resume document (PDF or DOC)
        file: PathBuf,
        /// Base URL of the API server
        #[arg(long, default_value = DEFAULT_API_URL)]
        api_url: String,
    },
}

pub async fn run_analyze(file: &Path, api_url: &str) -> Result<ExitCode> {
    let selected = SelectedFile::from_path(file)
        .await
        .with_context(|| format!("Failed to load {}", file.display()))?;

    let api = ApiClient::new(api_url);
    let mut form = UploadForm::new();
    form.select_file(selected);
    form.submit(&api).await;

    let (report, ok) = render_report(&form);
    print!("{report}");
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Text shown after a submit, and whether it succeeded.
fn render_report(form: &UploadForm) -> (String, bool) {
    let mut out = String::new();
    if let Some(status) = form.status_line() {
        out.push_str(&status);
        out.push('\n');
    }

    if let Some(error) = &form.error {
        out.push_str(&format!("Error: {error}\n"));
        return (out, false);
    }

    let grid = form.render_matches();
    if grid.is_empty() {
        out.push_str("No job matches found.\n");
    } else {
        out.push_str(&grid);
    }
    (out, true)
}
