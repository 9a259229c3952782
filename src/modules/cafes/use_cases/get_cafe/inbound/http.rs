use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    state.get_cafe.handle(&id).await.map(Json)
}
