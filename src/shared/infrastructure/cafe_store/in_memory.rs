// In memory implementation of the CafeStore port.
//
// Every check-then-mutate sequence runs under a single write guard, so the
// one-cafe-per-id rule holds when requests are served from several threads.

use crate::modules::cafes::core::cafe::{Cafe, CafeId};
use crate::shared::infrastructure::cafe_store::{CafeStore, CafeStoreError};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryCafeStore {
    cafes: RwLock<Vec<Cafe>>,
    is_offline: bool,
}

impl InMemoryCafeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: Vec<Cafe>) -> Result<Self, CafeStoreError> {
        let mut cafes: Vec<Cafe> = Vec::with_capacity(seed.len());
        for cafe in seed {
            if cafes.iter().any(|c| c.id == cafe.id) {
                return Err(CafeStoreError::Duplicate { id: cafe.id });
            }
            cafes.push(cafe);
        }
        Ok(Self {
            cafes: RwLock::new(cafes),
            is_offline: false,
        })
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), CafeStoreError> {
        if self.is_offline {
            return Err(CafeStoreError::Backend("Cafe store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl CafeStore for InMemoryCafeStore {
    async fn find_by_id(&self, id: CafeId) -> Result<Option<Cafe>, CafeStoreError> {
        self.ensure_online()?;
        Ok(self.cafes.read().await.iter().find(|c| c.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Cafe>, CafeStoreError> {
        self.ensure_online()?;
        Ok(self.cafes.read().await.clone())
    }

    async fn insert(&self, cafe: Cafe) -> Result<Vec<Cafe>, CafeStoreError> {
        self.ensure_online()?;
        let mut guard = self.cafes.write().await;
        if guard.iter().any(|c| c.id == cafe.id) {
            return Err(CafeStoreError::Duplicate { id: cafe.id });
        }
        guard.push(cafe);
        Ok(guard.clone())
    }

    async fn replace(&self, id: CafeId, cafe: Cafe) -> Result<Vec<Cafe>, CafeStoreError> {
        self.ensure_online()?;
        let mut guard = self.cafes.write().await;
        match guard.iter_mut().find(|c| c.id == id) {
            Some(slot) => *slot = cafe,
            None => return Err(CafeStoreError::NotFound { id }),
        }
        Ok(guard.clone())
    }

    async fn remove_by_id(&self, id: CafeId) -> Result<Option<Vec<Cafe>>, CafeStoreError> {
        self.ensure_online()?;
        let mut guard = self.cafes.write().await;
        Ok(guard.iter().position(|c| c.id == id).map(|index| {
            guard.remove(index);
            guard.clone()
        }))
    }
}
