use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET / - service description
pub async fn root() -> Json<Value> {
    Json(json!({
        "name": "Pet Toys API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "pets": "POST /pets (token), GET /pets/:petId",
            "toys": "POST /toys/:petId, PATCH|DELETE /toys/:petId/:toyId (token, owner only)",
            "health": "GET /health"
        }
    }))
}

/// GET /health - 200 when the pet store answers, 503 otherwise
pub async fn health(State(state): State<AppState>) -> ApiResult<Value> {
    if let Err(e) = state.pets.health_check().await {
        tracing::warn!("health check failed: {}", e);
        return Err(ApiError::service_unavailable("Pet store unavailable"));
    }

    Ok(ApiResponse::success(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now(),
        "database": "ok"
    })))
}
