use crate::modules::cafes::core::cafe::Cafe;
use crate::modules::cafes::use_cases::errors::CafeError;
use crate::shared::infrastructure::cafe_store::CafeStore;
use std::sync::Arc;

pub struct ListCafesHandler {
    store: Arc<dyn CafeStore>,
}

impl ListCafesHandler {
    pub fn new(store: Arc<dyn CafeStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<Vec<Cafe>, CafeError> {
        Ok(self.store.list().await?)
    }
}
