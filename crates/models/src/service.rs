use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, record::Validate};

/// An offered service as shown in the curved slider and on the detail page.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Service {
    pub icon: String,
    pub title: String,
    pub desc: String,
    pub detailed_desc: String,
    pub features: String,
    pub benefits: String,
    pub image_url: String,
}

impl Validate for Service {
    fn validate(&self) -> Result<(), ModelError> {
        if self.title.trim().is_empty() { return Err(ModelError::required("title")); }
        Ok(())
    }
}
