pub mod health;

use std::any::Any;

use axum::{
    extract::DefaultBodyLimit,
    http::Uri,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::analysis::handlers as analysis;
use crate::errors::AppError;
use crate::jobs::handlers as jobs;
use crate::resumes::handlers as resumes;
use crate::state::AppState;
use crate::web;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(web::index_handler))
        .route("/api/health", get(health::health_handler))
        // Resume API
        .route(
            "/api/resumes/upload",
            post(resumes::handle_upload).layer(DefaultBodyLimit::disable()),
        )
        .route("/api/resumes/:id", get(resumes::handle_get_resume))
        // Job matching API
        .route("/api/jobs/match", post(jobs::handle_match))
        // Analysis API
        .route("/api/analysis/skills", post(analysis::handle_skills))
        .route(
            "/api/analysis/interview-prep",
            post(analysis::handle_interview_prep),
        )
        .fallback(not_found)
        .with_state(state)
}

/// Request tracing, permissive CORS and the catch-all panic handler.
pub fn apply_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()) // TODO: restrict origins once the frontend has a fixed host
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::Internal(anyhow::anyhow!("handler panicked: {detail}")).into_response()
}
