use super::types::ReviewRequest;
use crate::reviewer::ReviewService;
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub reviewer: Arc<dyn ReviewService>,
}

/// Validate the request, relay the code to the review service, and map the
/// outcome to a plain-text response. The caller never sees the underlying
/// error, only a fixed 500 body.
pub async fn get_review(
    State(state): State<AppState>,
    Json(request): Json<ReviewRequest>,
) -> (StatusCode, String) {
    let Some(code) = request.code.filter(|code| !code.is_empty()) else {
        return (StatusCode::BAD_REQUEST, "code is required".to_string());
    };

    info!("Received review request for {} bytes of code", code.len());

    match state.reviewer.review(&code).await {
        Ok(review) => (StatusCode::OK, review),
        Err(e) => {
            error!("AI service error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error".to_string(),
            )
        }
    }
}
