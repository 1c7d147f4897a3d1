use std::sync::Arc;

use tracing::info;

use models::{contact::ContactMessage, Record, Validate};

use crate::content::CollectionService;
use crate::errors::ServiceError;
use crate::store::ContentStore;

/// Intake for the public contact form. Messages are kept in the `contacts`
/// collection for the admin to read; nothing is mailed out.
#[derive(Clone)]
pub struct ContactService {
    messages: CollectionService<ContactMessage>,
}

impl ContactService {
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self { messages: CollectionService::new(store) }
    }

    pub async fn submit(&self, input: ContactMessage) -> Result<Record<ContactMessage>, ServiceError> {
        let msg = input.normalized();
        msg.validate()?;
        let rec = self.messages.create(msg).await?;
        info!(id = %rec.id, has_company = rec.body.company.is_some(), "contact message stored");
        Ok(rec)
    }

    pub fn messages(&self) -> &CollectionService<ContactMessage> { &self.messages }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::empty_store;

    #[tokio::test]
    async fn stores_valid_message() -> Result<(), anyhow::Error> {
        let (store, backend) = empty_store().await?;
        let svc = ContactService::new(store);
        let rec = svc
            .submit(ContactMessage {
                name: "  Grace ".into(),
                email: "grace@example.com".into(),
                company: Some(String::new()),
                message: "Let's talk".into(),
                ..Default::default()
            })
            .await?;
        assert_eq!(rec.body.name, "Grace");
        assert_eq!(rec.body.company, None);
        assert_eq!(svc.messages().list().await.len(), 1);
        assert_eq!(backend.snapshot().await.map(|d| d.contacts.len()), Some(1));
        Ok(())
    }

    #[tokio::test]
    async fn rejects_missing_fields() -> Result<(), anyhow::Error> {
        let (store, _) = empty_store().await?;
        let svc = ContactService::new(store);
        let err = svc
            .submit(ContactMessage { name: "X".into(), ..Default::default() })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref m) if m == "Name, email, and message are required."));
        assert!(svc.messages().list().await.is_empty());
        Ok(())
    }
}
