use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::shared::infrastructure::cafe_store::CafeStoreError;

/// Client-facing failures of the cafe routes. The display text of each
/// variant is the `message` sent back in the response body.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CafeError {
    #[error("No se encontró ningún cafe con ese id")]
    NotFound,

    #[error("Ya existe un cafe con ese id")]
    AlreadyExists,

    #[error("El id del parámetro no coincide con el id del café recibido")]
    IdMismatch,

    #[error("No recibió ningún token en las cabeceras")]
    MissingToken,

    #[error("La ruta que intenta consultar no existe")]
    RouteNotFound,

    #[error("backend error: {0}")]
    Backend(String),
}

impl From<CafeStoreError> for CafeError {
    fn from(error: CafeStoreError) -> Self {
        match error {
            CafeStoreError::Duplicate { .. } => CafeError::AlreadyExists,
            CafeStoreError::NotFound { .. } => CafeError::NotFound,
            CafeStoreError::Backend(message) => CafeError::Backend(message),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl CafeError {
    pub fn status(&self) -> StatusCode {
        match self {
            CafeError::NotFound | CafeError::RouteNotFound => StatusCode::NOT_FOUND,
            CafeError::AlreadyExists | CafeError::IdMismatch | CafeError::MissingToken => {
                StatusCode::BAD_REQUEST
            }
            CafeError::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CafeError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "cafe store failure");
        } else {
            tracing::debug!(%status, error = %self, "request rejected");
        }
        (
            status,
            Json(ErrorBody {
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Fallback for routes the service does not expose.
pub async fn route_not_found() -> CafeError {
    CafeError::RouteNotFound
}
