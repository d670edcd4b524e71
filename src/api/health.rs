use axum::Json;
use serde_json::{json, Value};

/// Liveness probe; does not touch the upstream or check the API key.
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is healthy")
    )
)]
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "dream-oracle",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
