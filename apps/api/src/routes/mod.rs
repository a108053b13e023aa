pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers::handle_analyze_resume;
use crate::analysis::upload::MAX_UPLOAD_BYTES;
use crate::matching::handlers::handle_match_jobs;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_handler))
        .route("/api/analyze-resume", post(handle_analyze_resume))
        .route("/api/match-jobs", post(handle_match_jobs))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
