use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, warn};

use crate::errors::ServiceError;
use super::{backend::DocumentBackend, document::ContentDocument, legacy};

/// JSON file-backed document storage.
///
/// Writes go to a sibling `.tmp` file that is renamed over the target, so a
/// crash mid-write never leaves a truncated data file behind.
#[derive(Clone, Debug)]
pub struct JsonFileBackend {
    file_path: PathBuf,
    pretty: bool,
}

impl JsonFileBackend {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { file_path: path.into(), pretty: true }
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.file_path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.file_path.with_file_name(name)
    }
}

#[async_trait]
impl DocumentBackend for JsonFileBackend {
    async fn load(&self) -> Result<Option<ContentDocument>, ServiceError> {
        let bytes = match fs::read(&self.file_path).await {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let (doc, legacy) = legacy::parse_document(&bytes)?;
        if legacy {
            // 旧版数据文件（仅 posts 数组），下一次写入时会以新结构落盘
            warn!(path = %self.file_path.display(), "legacy array data file detected; upgrading in memory");
        }
        debug!(path = %self.file_path.display(), bytes = bytes.len(), "content document loaded");
        Ok(Some(doc))
    }

    async fn save(&self, doc: &ContentDocument) -> Result<(), ServiceError> {
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let data = if self.pretty { serde_json::to_vec_pretty(doc)? } else { serde_json::to_vec(doc)? };
        let tmp = self.tmp_path();
        fs::write(&tmp, &data).await?;
        fs::rename(&tmp, &self.file_path).await?;
        debug!(path = %self.file_path.display(), bytes = data.len(), "content document saved");
        Ok(())
    }

    fn describe(&self) -> String {
        format!("json:{}", self.file_path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{admin::AdminCredential, post::Post, Record};
    use uuid::Uuid;

    fn tmp_file() -> PathBuf {
        std::env::temp_dir().join(format!("content_{}/database.json", Uuid::new_v4()))
    }

    #[tokio::test]
    async fn missing_file_loads_none() -> Result<(), anyhow::Error> {
        let backend = JsonFileBackend::new(tmp_file());
        assert!(backend.load().await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn save_then_load_roundtrip_and_no_tmp_left() -> Result<(), anyhow::Error> {
        let path = tmp_file();
        let backend = JsonFileBackend::new(&path);
        let mut doc = ContentDocument::seed(AdminCredential::new("admin", "1234"));
        doc.posts.push(Record::new(Post { title: "Second".into(), ..Default::default() }));
        backend.save(&doc).await?;

        let loaded = backend.load().await?.expect("document");
        assert_eq!(loaded, doc);
        assert!(tokio::fs::metadata(backend.tmp_path()).await.is_err());

        // pretty 输出，两个空格缩进
        let text = tokio::fs::read_to_string(&path).await?;
        assert!(text.contains("\n  \"posts\""));

        if let Some(dir) = path.parent() { let _ = tokio::fs::remove_dir_all(dir).await; }
        Ok(())
    }

    #[tokio::test]
    async fn compact_mode_is_single_line() -> Result<(), anyhow::Error> {
        let path = tmp_file();
        let backend = JsonFileBackend::new(&path).pretty(false);
        backend.save(&ContentDocument::default()).await?;
        let text = tokio::fs::read_to_string(&path).await?;
        assert!(!text.contains('\n'));
        if let Some(dir) = path.parent() { let _ = tokio::fs::remove_dir_all(dir).await; }
        Ok(())
    }

    #[tokio::test]
    async fn corrupt_file_is_a_storage_error() -> Result<(), anyhow::Error> {
        let path = tmp_file();
        tokio::fs::create_dir_all(path.parent().unwrap()).await?;
        tokio::fs::write(&path, b"{ broken").await?;
        let backend = JsonFileBackend::new(&path);
        assert!(matches!(backend.load().await, Err(ServiceError::Storage(_))));
        if let Some(dir) = path.parent() { let _ = tokio::fs::remove_dir_all(dir).await; }
        Ok(())
    }
}
