use axum::Json;
use serde_json::{json, Value};

/// GET /api/health
/// Always 200; needs no configuration.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
