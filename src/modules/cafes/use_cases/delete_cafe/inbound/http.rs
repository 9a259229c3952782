use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, header::AUTHORIZATION},
    response::IntoResponse,
};

use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> impl IntoResponse {
    // A header that is not valid visible ASCII still counts as "sent".
    let token = headers
        .get(AUTHORIZATION)
        .map(|v| v.to_str().unwrap_or("<opaque>"));

    state.delete_cafe.handle(&id, token).await.map(Json)
}
