use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, record::Validate};

/// Message submitted through the public contact form.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub message: String,
}

impl ContactMessage {
    /// Blank optional fields are stored as absent.
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.email = self.email.trim().to_string();
        self.phone = self.phone.filter(|p| !p.trim().is_empty());
        self.company = self.company.filter(|c| !c.trim().is_empty());
        self
    }
}

impl Validate for ContactMessage {
    fn validate(&self) -> Result<(), ModelError> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() || self.message.trim().is_empty() {
            return Err(ModelError::Validation("Name, email, and message are required.".into()));
        }
        if !self.email.contains('@') { return Err(ModelError::Validation("invalid email".into())); }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg() -> ContactMessage {
        ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello".into(),
            ..Default::default()
        }
    }

    #[test]
    fn required_fields() {
        assert!(msg().validate().is_ok());
        assert!(ContactMessage { message: "  ".into(), ..msg() }.validate().is_err());
        assert!(ContactMessage { name: String::new(), ..msg() }.validate().is_err());
        assert!(ContactMessage { email: "nope".into(), ..msg() }.validate().is_err());
    }

    #[test]
    fn blank_optionals_dropped() {
        let m = ContactMessage { phone: Some(" ".into()), company: Some("Acme".into()), ..msg() }.normalized();
        assert_eq!(m.phone, None);
        assert_eq!(m.company.as_deref(), Some("Acme"));
        let v = serde_json::to_value(&m).unwrap();
        assert!(v.get("phone").is_none());
    }
}
