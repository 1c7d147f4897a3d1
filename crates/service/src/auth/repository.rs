use async_trait::async_trait;

use models::admin::AdminCredential;

use super::errors::AuthError;
use crate::store::ContentStore;

/// Where the admin credential comes from.
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    async fn admin_credential(&self) -> Result<AdminCredential, AuthError>;
}

#[async_trait]
impl CredentialRepository for ContentStore {
    async fn admin_credential(&self) -> Result<AdminCredential, AuthError> {
        Ok(self.current_admin().await)
    }
}

/// Fixed credential for tests and doc examples
pub mod mock {
    use super::*;

    pub struct StaticCredentialRepository(pub AdminCredential);

    #[async_trait]
    impl CredentialRepository for StaticCredentialRepository {
        async fn admin_credential(&self) -> Result<AdminCredential, AuthError> {
            Ok(self.0.clone())
        }
    }
}
