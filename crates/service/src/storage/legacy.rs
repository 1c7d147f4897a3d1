//! Upgrade of the early posts-only data file.
//!
//! Early data files were a bare JSON array of posts. The current format is an
//! object with one key per collection.

use std::path::Path;

use serde_json::Value;
use tokio::fs;
use tracing::info;

use crate::errors::ServiceError;
use super::{backend::DocumentBackend, document::ContentDocument, json_file::JsonFileBackend};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationOutcome {
    Migrated,
    AlreadyCurrent,
    FileNotFound,
}

/// Parse file contents in either format. The flag reports whether the legacy
/// array form was found.
pub fn parse_document(bytes: &[u8]) -> Result<(ContentDocument, bool), ServiceError> {
    let value: Value = serde_json::from_slice(bytes)?;
    match value {
        Value::Array(_) => {
            let posts = serde_json::from_value(value)?;
            Ok((ContentDocument::from_legacy_posts(posts), true))
        }
        Value::Object(_) => Ok((serde_json::from_value(value)?, false)),
        other => Err(ServiceError::Storage(format!(
            "unexpected top-level JSON value: {}",
            type_name(&other)
        ))),
    }
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Rewrite a legacy data file in place; object-shaped files are left untouched.
/// The rewrite goes through [`JsonFileBackend`], so it is atomic as well.
pub async fn migrate_file(path: impl AsRef<Path>, pretty: bool) -> Result<MigrationOutcome, ServiceError> {
    let path = path.as_ref();
    let bytes = match fs::read(path).await {
        Ok(b) => b,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(MigrationOutcome::FileNotFound),
        Err(e) => return Err(e.into()),
    };
    let (doc, legacy) = parse_document(&bytes)?;
    if !legacy {
        return Ok(MigrationOutcome::AlreadyCurrent);
    }
    JsonFileBackend::new(path).pretty(pretty).save(&doc).await?;
    info!(path = %path.display(), posts = doc.posts.len(), "legacy data file migrated");
    Ok(MigrationOutcome::Migrated)
}
