use crate::modules::cafes::core::cafe::{Cafe, CafeId};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CafeStoreError {
    #[error("a cafe with id {id} already exists")]
    Duplicate { id: CafeId },

    #[error("no cafe with id {id}")]
    NotFound { id: CafeId },

    #[error("backend error: {0}")]
    Backend(String),
}

/// Ordered collection of cafes, the single source of truth of a running
/// service. Implementations keep at most one cafe per id and preserve
/// insertion order for [`CafeStore::list`]. Mutations return the sequence as
/// it stood right after the change.
#[async_trait]
pub trait CafeStore: Send + Sync {
    async fn find_by_id(&self, id: CafeId) -> Result<Option<Cafe>, CafeStoreError>;

    async fn list(&self) -> Result<Vec<Cafe>, CafeStoreError>;

    /// Appends `cafe` and returns the resulting sequence, or fails with
    /// [`CafeStoreError::Duplicate`] without touching the store.
    async fn insert(&self, cafe: Cafe) -> Result<Vec<Cafe>, CafeStoreError>;

    /// Overwrites the cafe stored under `id` and returns the resulting
    /// sequence. The caller guarantees `cafe.id == id`.
    async fn replace(&self, id: CafeId, cafe: Cafe) -> Result<Vec<Cafe>, CafeStoreError>;

    /// Removes the cafe stored under `id`. Returns the remaining sequence, or
    /// `None` when no cafe had that id.
    async fn remove_by_id(&self, id: CafeId) -> Result<Option<Vec<Cafe>>, CafeStoreError>;
}

pub mod in_memory;
