#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Each pipeline stage returns a tagged failure so the routing layer maps every
/// failure kind to a deterministic status code.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Completion parse error: {message}")]
    CompletionParse { message: String, raw: String },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::MissingApiKey => {
                AppError::Configuration("ANTHROPIC_API_KEY is not set".to_string())
            }
            LlmError::UnparseableCompletion { raw, source } => AppError::CompletionParse {
                message: source.to_string(),
                raw,
            },
            other => AppError::Provider(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => {
                tracing::warn!("Validation error: {msg}");
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Extraction(msg) => {
                tracing::warn!("Extraction error: {msg}");
                (StatusCode::BAD_REQUEST, "EXTRACTION_ERROR", msg.clone())
            }
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONFIGURATION_ERROR",
                    msg.clone(),
                )
            }
            AppError::Provider(msg) => {
                tracing::error!("Provider error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "PROVIDER_ERROR", msg.clone())
            }
            AppError::CompletionParse { message, raw } => {
                tracing::error!("Completion was not valid JSON: {message}; raw: {raw}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PARSE_ERROR",
                    format!("LLM response was not valid JSON: {message}"),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let mut body = json!({
            "error": code,
            "message": message,
        });

        // Surface the raw completion so callers can inspect what the model returned.
        if let AppError::CompletionParse { raw, .. } = &self {
            body["rawResponse"] = json!(raw);
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn validation_maps_to_400() {
        let resp = AppError::Validation("resumeText is required".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn extraction_maps_to_400() {
        let resp = AppError::Extraction("Failed to extract text from PDF".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn configuration_maps_to_500() {
        let resp = AppError::Configuration("ANTHROPIC_API_KEY is not set".into()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn completion_parse_response_is_500_with_raw_text_in_body() {
        let response = AppError::CompletionParse {
            message: "expected value at line 1 column 1".to_string(),
            raw: "Sorry, I can't help".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "PARSE_ERROR");
        assert_eq!(body["rawResponse"], "Sorry, I can't help");
    }

    #[test]
    fn missing_api_key_converts_to_configuration() {
        let err: AppError = LlmError::MissingApiKey.into();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn unparseable_completion_keeps_raw_text() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: AppError = LlmError::UnparseableCompletion {
            raw: "Sorry, I can't help".to_string(),
            source,
        }
        .into();
        match err {
            AppError::CompletionParse { raw, .. } => assert_eq!(raw, "Sorry, I can't help"),
            other => panic!("expected CompletionParse, got {other:?}"),
        }
    }
}
