//! Storage Collaborator contract
use async_trait::async_trait;
use serde_json::Value;

use jury_core::Result;

/// Logical collection holding all cases
pub const COLLECTION_CASES: &str = "cases";
/// Logical collection holding all verdicts
pub const COLLECTION_VERDICTS: &str = "verdicts";

/// Abstract key-value store keyed by logical collections.
///
/// Consumers always read a whole collection, mutate in memory, and write
/// the whole collection back. No transactional multi-key operations;
/// concurrent writers are last-write-wins. Failures surface as
/// `JuryError::TransientIo` and are not retried.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Fetch every record in a collection; `None` when the collection
    /// has never been written
    async fn get(&self, collection: &str) -> Result<Option<Vec<Value>>>;

    /// Replace a collection's records wholesale
    async fn put(&self, collection: &str, records: Vec<Value>) -> Result<()>;
}
