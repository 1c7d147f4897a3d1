use async_trait::async_trait;

use crate::errors::ServiceError;
use super::document::ContentDocument;

/// Trait abstraction for where the content document lives.
/// Implementations can be file-backed, in-memory, or a document database.
#[async_trait]
pub trait DocumentBackend: Send + Sync {
    /// Load the stored document; `Ok(None)` when nothing has been written yet.
    async fn load(&self) -> Result<Option<ContentDocument>, ServiceError>;
    async fn save(&self, doc: &ContentDocument) -> Result<(), ServiceError>;
    /// Short human-readable location, used in logs.
    fn describe(&self) -> String;
}
