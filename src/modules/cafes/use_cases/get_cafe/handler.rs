use crate::modules::cafes::core::cafe::{Cafe, parse_cafe_id};
use crate::modules::cafes::use_cases::errors::CafeError;
use crate::shared::infrastructure::cafe_store::CafeStore;
use std::sync::Arc;

pub struct GetCafeHandler {
    store: Arc<dyn CafeStore>,
}

impl GetCafeHandler {
    pub fn new(store: Arc<dyn CafeStore>) -> Self {
        Self { store }
    }

    /// Looks up the cafe addressed by the raw `:id` path segment.
    pub async fn handle(&self, raw_id: &str) -> Result<Cafe, CafeError> {
        let id = parse_cafe_id(raw_id).ok_or(CafeError::NotFound)?;
        self.store.find_by_id(id).await?.ok_or(CafeError::NotFound)
    }
}
