pub mod analyze;
pub mod error;
pub mod health;

use axum::{
    Router,
    routing::{get, post},
};

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Dream analysis: POST, OPTIONS preflight, everything else 405
        .route(
            "/analyze",
            post(analyze::analyze)
                .options(analyze::preflight)
                .fallback(analyze::method_not_allowed),
        )
        .with_state(state)
}
