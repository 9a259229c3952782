use crate::modules::cafes::core::cafe::{Cafe, parse_cafe_id};
use crate::modules::cafes::use_cases::errors::CafeError;
use crate::shared::infrastructure::cafe_store::CafeStore;
use std::sync::Arc;

pub struct DeleteCafeHandler {
    store: Arc<dyn CafeStore>,
}

impl DeleteCafeHandler {
    pub fn new(store: Arc<dyn CafeStore>) -> Self {
        Self { store }
    }

    /// Removes the cafe addressed by `raw_id` and returns the remaining menu.
    ///
    /// Any non-empty `token` is accepted; only its presence is checked, and
    /// that check runs before the lookup.
    pub async fn handle(&self, raw_id: &str, token: Option<&str>) -> Result<Vec<Cafe>, CafeError> {
        if token.is_none_or(str::is_empty) {
            return Err(CafeError::MissingToken);
        }
        let id = parse_cafe_id(raw_id).ok_or(CafeError::NotFound)?;
        let cafes = self
            .store
            .remove_by_id(id)
            .await?
            .ok_or(CafeError::NotFound)?;
        tracing::info!(cafe_id = id, "cafe deleted");
        Ok(cafes)
    }
}
