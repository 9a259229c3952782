// Shared test fixtures for cafes and seeded stores.

use crate::modules::cafes::core::cafe::{Cafe, CafeId};
use crate::modules::cafes::core::seed::default_seed;
use crate::shared::infrastructure::cafe_store::in_memory::InMemoryCafeStore;
use crate::shared::infrastructure::cafe_store::{CafeStore, CafeStoreError};
use async_trait::async_trait;
use serde_json::Number;

pub struct CafeBuilder {
    inner: Cafe,
}

impl CafeBuilder {
    pub fn new() -> Self {
        Self {
            inner: Cafe::new(100, "Café de prueba", 1000),
        }
    }

    pub fn id(mut self, v: CafeId) -> Self {
        self.inner.id = v;
        self
    }

    pub fn nombre(mut self, v: impl Into<String>) -> Self {
        self.inner.nombre = v.into();
        self
    }

    pub fn precio(mut self, v: impl Into<Number>) -> Self {
        self.inner.precio = v.into();
        self
    }

    pub fn build(self) -> Cafe {
        self.inner
    }
}

/// Store holding the default menu (ids 1 to 4).
pub fn seeded_store() -> InMemoryCafeStore {
    InMemoryCafeStore::with_seed(default_seed().unwrap()).unwrap()
}

/// Seeded store whose `list` always fails, so a mutation can only answer
/// with the snapshot it took itself.
pub struct SnapshotOnlyStore {
    inner: InMemoryCafeStore,
}

impl SnapshotOnlyStore {
    pub fn new() -> Self {
        Self {
            inner: seeded_store(),
        }
    }
}

#[async_trait]
impl CafeStore for SnapshotOnlyStore {
    async fn find_by_id(&self, id: CafeId) -> Result<Option<Cafe>, CafeStoreError> {
        self.inner.find_by_id(id).await
    }

    async fn list(&self) -> Result<Vec<Cafe>, CafeStoreError> {
        Err(CafeStoreError::Backend("list is not available".into()))
    }

    async fn insert(&self, cafe: Cafe) -> Result<Vec<Cafe>, CafeStoreError> {
        self.inner.insert(cafe).await
    }

    async fn replace(&self, id: CafeId, cafe: Cafe) -> Result<Vec<Cafe>, CafeStoreError> {
        self.inner.replace(id, cafe).await
    }

    async fn remove_by_id(&self, id: CafeId) -> Result<Option<Vec<Cafe>>, CafeStoreError> {
        self.inner.remove_by_id(id).await
    }
}

#[cfg(test)]
mod cafe_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let cafe = CafeBuilder::new()
            .id(6)
            .nombre("Café Mocha")
            .precio(2500)
            .build();
        assert_eq!(cafe, Cafe::new(6, "Café Mocha", 2500));
    }
}
