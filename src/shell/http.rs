use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::cafes::use_cases::create_cafe::inbound::http as create_http;
use crate::modules::cafes::use_cases::delete_cafe::inbound::http as delete_http;
use crate::modules::cafes::use_cases::errors::route_not_found;
use crate::modules::cafes::use_cases::get_cafe::inbound::http as get_http;
use crate::modules::cafes::use_cases::list_cafes::inbound::http as list_http;
use crate::modules::cafes::use_cases::update_cafe::inbound::http as update_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/cafes", get(list_http::handle).post(create_http::handle))
        .route(
            "/cafes/{id}",
            get(get_http::handle)
                .put(update_http::handle)
                .delete(delete_http::handle),
        )
        .fallback(route_not_found)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
