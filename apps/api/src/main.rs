mod analysis;
mod cli;
mod client;
mod config;
mod db;
mod errors;
mod jobs;
mod models;
mod resumes;
mod routes;
mod state;
mod web;

use std::net::SocketAddr;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::routes::{apply_middleware, build_router};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok(); // load .env if present; ignore if missing

    // Logs go to stderr so `analyze` output on stdout stays clean
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}=info,tower_http=info",
                env!("CARGO_CRATE_NAME")
            ))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            // Server configuration (fails only on malformed values)
            let config = Config::from_env()?;
            serve(config).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Analyze { file, api_url } => cli::run_analyze(&file, &api_url).await,
    }
}

async fn serve(config: Config) -> Result<()> {
    info!("Starting AIJobMatcher API v{}", env!("CARGO_PKG_VERSION"));

    // The server starts whether or not MongoDB is reachable
    let db = db::connect(&config.mongodb_uri).await?;
    tokio::spawn(db::verify_connection(db.clone()));

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    let state = AppState { db, config };
    let app = apply_middleware(build_router(state));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server running on port {}", addr.port());
    axum::serve(listener, app).await?;

    Ok(())
}
