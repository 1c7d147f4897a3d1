use std::sync::Arc;

use tracing::{info, warn, instrument};

use super::domain::{AuthSession, LoginInput};
use super::errors::AuthError;
use super::repository::CredentialRepository;

/// Admin login check, independent of web framework.
///
/// Credentials are compared verbatim; there is no hashing or session issuance.
pub struct AuthService<R: CredentialRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: CredentialRepository + ?Sized> Clone for AuthService<R> {
    fn clone(&self) -> Self { Self { repo: Arc::clone(&self.repo) } }
}

impl<R: CredentialRepository + ?Sized> AuthService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Check a username/password pair against the stored admin credential.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use models::admin::AdminCredential;
    /// use service::auth::{AuthService, domain::LoginInput, repository::mock::StaticCredentialRepository};
    /// let repo = Arc::new(StaticCredentialRepository(AdminCredential::new("admin", "1234")));
    /// let svc = AuthService::new(repo);
    /// let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
    /// let ok = rt.block_on(svc.login(LoginInput { username: "admin".into(), password: "1234".into() }));
    /// assert!(ok.is_ok());
    /// ```
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, AuthError> {
        if input.username.trim().is_empty() || input.password.is_empty() {
            return Err(AuthError::Validation("username and password are required".into()));
        }
        let admin = self.repo.admin_credential().await?;
        if !admin.matches(&input.username, &input.password) {
            warn!("admin login rejected");
            return Err(AuthError::Unauthorized);
        }
        info!("admin login accepted");
        Ok(AuthSession { username: admin.username })
    }
}
