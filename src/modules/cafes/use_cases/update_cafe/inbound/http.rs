use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::cafes::core::cafe::Cafe;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Cafe>, JsonRejection>,
) -> impl IntoResponse {
    let Json(cafe) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    state.update_cafe.handle(&id, cafe).await.map(Json).into_response()
}
