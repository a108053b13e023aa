//! Axum route handler for the job-matching endpoint.

use axum::{
    extract::{FromRequest, Request, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::{parse_completion, prompts::JSON_ONLY_SYSTEM};
use crate::matching::prompts::build_job_match_prompt;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchJobsRequest {
    /// Free-form profile object, typically the analyze-resume response.
    /// Its internal shape is not validated, only its presence.
    pub user_profile: Option<Value>,
    pub user_answers: Option<Vec<String>>,
}

/// POST /api/match-jobs
///
/// Requires both `userProfile` and `userAnswers`. Pipeline: prompt → LLM →
/// JSON relay.
pub async fn handle_match_jobs(
    State(state): State<AppState>,
    req: Request,
) -> Result<Json<Value>, AppError> {
    let Json(body): Json<MatchJobsRequest> = Json::from_request(req, &())
        .await
        .map_err(|e| AppError::Validation(format!("Invalid JSON body: {e}")))?;

    let profile = body
        .user_profile
        .ok_or_else(|| AppError::Validation("userProfile is required".to_string()))?;
    let answers = body
        .user_answers
        .ok_or_else(|| AppError::Validation("userAnswers is required".to_string()))?;

    info!(answers = answers.len(), "Matching jobs for candidate profile");

    let prompt = build_job_match_prompt(&profile, &answers);
    let completion = state.llm.complete(&prompt, JSON_ONLY_SYSTEM).await?;
    let parsed = parse_completion(&completion)?;

    Ok(Json(parsed))
}
