//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.

use async_trait::async_trait;
use crate::domain::DomainResult;

/// Core repository trait for CRUD operations
///
/// Generic over the stored entity; ids are database row ids.
/// All operations are async so callers never care which store backs them.
#[async_trait]
pub trait Repository<T>: Send + Sync {
    /// Create a new entity; the returned copy carries the assigned id
    async fn create(&self, entity: &T) -> DomainResult<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: u32) -> DomainResult<Option<T>>;

    /// List all entities
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Delete entity by ID. Deleting a missing entity is not an error.
    async fn delete(&self, id: u32) -> DomainResult<()>;
}
