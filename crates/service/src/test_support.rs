#![cfg(test)]
use std::sync::Arc;

use models::admin::AdminCredential;

use crate::storage::{memory::MemoryBackend, ContentDocument};
use crate::store::ContentStore;

pub fn default_admin() -> AdminCredential {
    AdminCredential::new("admin", "1234")
}

/// Store over an empty in-memory document (no seed post).
pub async fn empty_store() -> Result<(Arc<ContentStore>, Arc<MemoryBackend>), anyhow::Error> {
    let backend = Arc::new(MemoryBackend::with_document(ContentDocument {
        admin: Some(default_admin()),
        ..Default::default()
    }));
    let store = ContentStore::open(backend.clone(), default_admin()).await?;
    Ok((store, backend))
}
