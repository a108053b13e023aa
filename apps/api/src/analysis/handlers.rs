//! Axum route handler for the analyze-resume endpoint.

use axum::{
    extract::{FromRequest, Multipart, Request, State},
    http::header,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::analysis::prompts::build_resume_analysis_prompt;
use crate::analysis::upload::{read_multipart, AnalyzeInput};
use crate::errors::AppError;
use crate::extraction::extract_text;
use crate::llm_client::{parse_completion, prompts::JSON_ONLY_SYSTEM};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(rename = "resumeText")]
    pub resume_text: Option<String>,
}

/// POST /api/analyze-resume
///
/// Accepts a multipart `file` field (pdf/docx/txt) or a JSON body with
/// `resumeText`. Pipeline: upload gate → extraction → non-empty check →
/// prompt → LLM → JSON relay.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    req: Request,
) -> Result<Json<Value>, AppError> {
    let resume_text = resume_text_from_request(req).await?;

    if resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Resume contains no extractable text".to_string(),
        ));
    }

    info!(chars = resume_text.len(), "Analyzing resume");

    let prompt = build_resume_analysis_prompt(&resume_text);
    let completion = state.llm.complete(&prompt, JSON_ONLY_SYSTEM).await?;
    let parsed = parse_completion(&completion)?;

    Ok(Json(parsed))
}

/// Resolves the resume text from either request shape.
/// When a multipart request carries both a file and a `resumeText` part,
/// the file wins.
async fn resume_text_from_request(req: Request) -> Result<String, AppError> {
    let is_multipart = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.starts_with("multipart/form-data"))
        .unwrap_or(false);

    if is_multipart {
        let multipart = Multipart::from_request(req, &())
            .await
            .map_err(|e| AppError::Validation(format!("Invalid multipart request: {e}")))?;
        let AnalyzeInput { file, resume_text } = read_multipart(multipart).await?;

        if let Some(file) = file {
            info!(file = %file.name, size = file.bytes.len(), "Extracting text from upload");
            return extract_text(&file.bytes, file.kind);
        }
        return resume_text.ok_or_else(|| {
            AppError::Validation("Either a file or resumeText must be provided".to_string())
        });
    }

    let Json(body): Json<AnalyzeRequest> = Json::from_request(req, &())
        .await
        .map_err(|e| AppError::Validation(format!("Invalid JSON body: {e}")))?;
    body.resume_text
        .ok_or_else(|| AppError::Validation("resumeText is required".to_string()))
}
