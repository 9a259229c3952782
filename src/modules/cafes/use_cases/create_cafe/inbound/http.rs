use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::cafes::core::cafe::Cafe;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<Cafe>, JsonRejection>,
) -> impl IntoResponse {
    let Json(cafe) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.create_cafe.handle(cafe).await {
        Ok(cafes) => (StatusCode::CREATED, Json(cafes)).into_response(),
        Err(e) => e.into_response(),
    }
}
