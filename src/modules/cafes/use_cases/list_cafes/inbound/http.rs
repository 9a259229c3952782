use axum::{Json, extract::State, response::IntoResponse};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    state.list_cafes.handle().await.map(Json)
}
