use crate::modules::cafes::core::cafe::Cafe;
use crate::modules::cafes::use_cases::errors::CafeError;
use crate::shared::infrastructure::cafe_store::CafeStore;
use std::sync::Arc;

pub struct CreateCafeHandler {
    store: Arc<dyn CafeStore>,
}

impl CreateCafeHandler {
    pub fn new(store: Arc<dyn CafeStore>) -> Self {
        Self { store }
    }

    /// Adds `cafe` to the menu and returns the whole updated menu.
    pub async fn handle(&self, cafe: Cafe) -> Result<Vec<Cafe>, CafeError> {
        let id = cafe.id;
        let cafes = self.store.insert(cafe).await?;
        tracing::info!(cafe_id = id, "cafe created");
        Ok(cafes)
    }
}
