use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use models::admin::AdminCredential;

use crate::errors::ServiceError;
use crate::storage::{DocumentBackend, ContentDocument};

/// Shared, cached copy of the content document.
///
/// Reads are served from memory. Every mutation runs against a copy that is
/// persisted first and only then swapped in, so a failed write leaves both the
/// cache and the backend at the previous state.
pub struct ContentStore {
    doc: RwLock<ContentDocument>,
    backend: Arc<dyn DocumentBackend>,
    default_admin: AdminCredential,
}

impl ContentStore {
    /// Load the document from the backend, seeding and persisting it when empty.
    pub async fn open(
        backend: Arc<dyn DocumentBackend>,
        default_admin: AdminCredential,
    ) -> Result<Arc<Self>, ServiceError> {
        let doc = match backend.load().await? {
            Some(doc) => doc,
            None => {
                let seeded = ContentDocument::seed(default_admin.clone());
                backend.save(&seeded).await?;
                info!(backend = %backend.describe(), "initialized content document with seed data");
                seeded
            }
        };
        info!(
            backend = %backend.describe(),
            posts = doc.posts.len(),
            services = doc.services.len(),
            metrics = doc.metrics.len(),
            process = doc.process.len(),
            contacts = doc.contacts.len(),
            "content store ready"
        );
        Ok(Arc::new(Self { doc: RwLock::new(doc), backend, default_admin }))
    }

    /// Run a read-only closure against the current document.
    pub async fn read<R>(&self, f: impl FnOnce(&ContentDocument) -> R) -> R {
        let doc = self.doc.read().await;
        f(&doc)
    }

    /// Apply a mutation and persist atomically.
    pub async fn update<R>(
        &self,
        f: impl FnOnce(&mut ContentDocument) -> Result<R, ServiceError>,
    ) -> Result<R, ServiceError> {
        let mut doc = self.doc.write().await;
        let mut next = doc.clone();
        let out = f(&mut next)?;
        self.backend.save(&next).await?;
        *doc = next;
        Ok(out)
    }

    /// Admin credential to check logins against; the configured default if none is stored.
    pub async fn current_admin(&self) -> AdminCredential {
        self.read(|doc| doc.admin.clone())
            .await
            .unwrap_or_else(|| self.default_admin.clone())
    }
}
