use async_trait::async_trait;

use models::record::{Record, RecordId};

use crate::errors::ServiceError;

/// Trait abstraction for record storage, one instance per record kind.
/// Implementations can be file-backed, database-backed, or remote KV.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert a new record (`id == None`, a fresh id is assigned) or update
    /// an existing one in place. Updating a missing id is a `NotFound` error.
    async fn put(&self, id: Option<RecordId>, label: &str) -> Result<Record, ServiceError>;

    /// Fetch a record by id.
    async fn get(&self, id: RecordId) -> Result<Record, ServiceError>;

    /// All records in insertion order.
    async fn list(&self) -> Result<Vec<Record>, ServiceError>;
}
