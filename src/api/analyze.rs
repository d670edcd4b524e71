use axum::{Json, body::Bytes, extract::State, http::StatusCode};

use crate::domain::DomainError;
use crate::dream::{AnalysisResult, DreamInput, ErrorBody};
use crate::infrastructure::AppState;

#[utoipa::path(
    post,
    path = "/api/analyze",
    request_body = DreamInput,
    responses(
        (status = 200, description = "Psychological and prophetic interpretation", body = AnalysisResult),
        (status = 400, description = "No dream information provided", body = ErrorBody),
        (status = 500, description = "Missing API key or upstream failure", body = ErrorBody)
    )
)]
pub async fn analyze(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AnalysisResult>, DomainError> {
    let result = state.dream_service.analyze(&body).await?;
    Ok(Json(result))
}

/// CORS preflight: empty 200, headers come from the router layer.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed() -> DomainError {
    DomainError::MethodNotAllowed
}
