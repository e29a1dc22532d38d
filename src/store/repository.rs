//! Storage trait and error types for person records.

use async_trait::async_trait;

use crate::models::Person;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Error type for store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No record with the given id exists in the store.
    #[error("no person with id {id}")]
    NotFound { id: String },
}

impl StoreError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }
}

/// Abstract interface over the authoritative person collection.
///
/// Implementations must be safe to share across request handlers; the
/// in-memory backend guards its backing sequence with a single lock so
/// concurrent list/add/update/remove calls never observe torn state.
///
/// Update and remove match on `id` and report a miss as
/// [`StoreError::NotFound`] rather than silently doing nothing.
#[async_trait]
pub trait PersonStore: Send + Sync {
    /// Snapshot of the current ordered sequence of all person records.
    async fn list(&self) -> StoreResult<Vec<Person>>;

    /// Append a new record and return it as stored.
    ///
    /// The store performs no duplicate-id check; callers own id uniqueness.
    async fn add(&self, person: Person) -> StoreResult<Person>;

    /// Replace the names of the first record whose id matches, returning the
    /// updated record.
    async fn update(&self, person: Person) -> StoreResult<Person>;

    /// Remove and return the first record with the given id.
    async fn remove(&self, id: &str) -> StoreResult<Person>;
}
