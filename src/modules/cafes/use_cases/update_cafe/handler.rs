use crate::modules::cafes::core::cafe::{Cafe, parse_cafe_id};
use crate::modules::cafes::use_cases::errors::CafeError;
use crate::shared::infrastructure::cafe_store::CafeStore;
use std::sync::Arc;

pub struct UpdateCafeHandler {
    store: Arc<dyn CafeStore>,
}

impl UpdateCafeHandler {
    pub fn new(store: Arc<dyn CafeStore>) -> Self {
        Self { store }
    }

    /// Replaces the cafe addressed by `raw_id` with `cafe`.
    ///
    /// The path id must equal `cafe.id`; that is checked before the store is
    /// consulted, and an id that does not exist afterwards is `NotFound`.
    pub async fn handle(&self, raw_id: &str, cafe: Cafe) -> Result<Vec<Cafe>, CafeError> {
        let id = match parse_cafe_id(raw_id) {
            Some(id) if id == cafe.id => id,
            _ => return Err(CafeError::IdMismatch),
        };
        let cafes = self.store.replace(id, cafe).await?;
        tracing::info!(cafe_id = id, "cafe updated");
        Ok(cafes)
    }
}
