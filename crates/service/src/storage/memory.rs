use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::errors::ServiceError;
use super::{backend::DocumentBackend, document::ContentDocument};

/// In-process backend for tests and throwaway instances.
#[derive(Default)]
pub struct MemoryBackend {
    doc: Mutex<Option<ContentDocument>>,
    saves: AtomicUsize,
    fail_saves: AtomicBool,
}

impl MemoryBackend {
    pub fn new() -> Self { Self::default() }

    pub fn with_document(doc: ContentDocument) -> Self {
        Self { doc: Mutex::new(Some(doc)), ..Default::default() }
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize { self.saves.load(Ordering::SeqCst) }

    /// Make subsequent saves fail, to exercise write-error paths.
    pub fn set_fail_saves(&self, fail: bool) { self.fail_saves.store(fail, Ordering::SeqCst); }

    pub async fn snapshot(&self) -> Option<ContentDocument> { self.doc.lock().await.clone() }
}

#[async_trait]
impl DocumentBackend for MemoryBackend {
    async fn load(&self) -> Result<Option<ContentDocument>, ServiceError> {
        Ok(self.doc.lock().await.clone())
    }

    async fn save(&self, doc: &ContentDocument) -> Result<(), ServiceError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(ServiceError::Storage("memory backend configured to fail".into()));
        }
        *self.doc.lock().await = Some(doc.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn describe(&self) -> String { "memory".to_string() }
}
