use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, record::Validate};

/// The single admin login. Stored in plaintext alongside the content.
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminCredential {
    pub username: String,
    pub password: String,
}

impl AdminCredential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }

    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl fmt::Debug for AdminCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredential")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl Validate for AdminCredential {
    fn validate(&self) -> Result<(), ModelError> {
        if self.username.trim().is_empty() { return Err(ModelError::required("username")); }
        if self.password.is_empty() { return Err(ModelError::required("password")); }
        Ok(())
    }
}
