use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

/// Body-level validation run before a record is created or replaced.
pub trait Validate {
    fn validate(&self) -> Result<(), ModelError> { Ok(()) }
}

pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Stored envelope around a collection body.
///
/// Body fields are flattened so the JSON shape is
/// `{"id": .., <body fields>, "created_at": .., "updated_at": ..}`.
/// Legacy entries without `id`/`created_at` get fresh values on load.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Record<T> {
    #[serde(default = "new_id")]
    pub id: String,
    #[serde(flatten)]
    pub body: T,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl<T> Record<T> {
    pub fn new(body: T) -> Self {
        Self { id: new_id(), body, created_at: Utc::now(), updated_at: None }
    }

    /// Full replace: the body is swapped, id and created_at survive.
    pub fn replace(&mut self, body: T) {
        self.body = body;
        self.updated_at = Some(Utc::now());
    }
}
