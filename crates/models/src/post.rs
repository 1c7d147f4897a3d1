use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, record::Validate};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Post {
    pub title: String,
    pub category: String,
    pub excerpt: String,
    pub content: String,
    pub image_url: String,
}

impl Validate for Post {
    fn validate(&self) -> Result<(), ModelError> {
        if self.title.trim().is_empty() { return Err(ModelError::required("title")); }
        Ok(())
    }
}
