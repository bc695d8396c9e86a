use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::SessionClaims;
use chrono::Utc;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::ChangePasswordCommand;
use crate::domain::account::models::IssuedSession;
use crate::domain::account::models::LoginCommand;
use crate::domain::account::models::RegisterCommand;
use crate::domain::account::models::User;
use crate::domain::account::models::UserId;
use crate::domain::account::ports::AccountServicePort;
use crate::domain::account::ports::TokenRevocationStore;
use crate::domain::account::ports::UserRepository;

/// Domain service implementation for account and session operations.
///
/// Generic over the user store and the revocation store.
pub struct AccountService<UR, RS>
where
    UR: UserRepository,
    RS: TokenRevocationStore,
{
    repository: Arc<UR>,
    revocations: Arc<RS>,
    authenticator: Arc<Authenticator>,
}

impl<UR, RS> AccountService<UR, RS>
where
    UR: UserRepository,
    RS: TokenRevocationStore,
{
    /// Create a new account service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `revocations` - Store of logged-out tokens
    /// * `authenticator` - Password hashing and token signing
    pub fn new(repository: Arc<UR>, revocations: Arc<RS>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            revocations,
            authenticator,
        }
    }

    fn verify(&self, token: &str) -> Result<SessionClaims, AccountError> {
        self.authenticator
            .validate_token(token)
            .map_err(AccountError::from_verification)
    }

    async fn caller(&self, claims: &SessionClaims) -> Result<User, AccountError> {
        let user_id =
            UserId::from_string(&claims.sub).map_err(|e| AccountError::InvalidToken(e.to_string()))?;

        self.repository
            .find_by_id(&user_id)
            .await?
            .ok_or(AccountError::NotFound(claims.sub.clone()))
    }
}

#[async_trait]
impl<UR, RS> AccountServicePort for AccountService<UR, RS>
where
    UR: UserRepository,
    RS: TokenRevocationStore,
{
    async fn register(&self, command: RegisterCommand) -> Result<User, AccountError> {
        if command.password != command.confirm_password {
            return Err(AccountError::PasswordConfirmationMismatch);
        }

        // Pre-check only; the store's unique constraint settles concurrent registrations.
        if self
            .repository
            .find_by_email(&command.email)
            .await?
            .is_some()
        {
            return Err(AccountError::EmailAlreadyExists(command.email));
        }

        let password_hash = self.authenticator.hash_password(&command.password)?;
        let user = User::register(command.email, password_hash, command.full_name);

        let created_user = self.repository.create(user).await?;
        tracing::info!(user_id = %created_user.id, "User registered");

        Ok(created_user)
    }

    async fn login(&self, command: LoginCommand) -> Result<IssuedSession, AccountError> {
        let user = self
            .repository
            .find_by_email(&command.email)
            .await?
            .ok_or_else(|| AccountError::EmailNotFound(command.email.clone()))?;

        let claims = SessionClaims::for_user(
            user.id,
            &user.email,
            &user.full_name,
            user.role,
            self.authenticator.token_validity(),
        );

        let result = self
            .authenticator
            .authenticate(&command.password, &user.password_hash, &claims)
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => AccountError::InvalidCredentials,
                AuthenticationError::PasswordError(err) => AccountError::Password(err),
                AuthenticationError::JwtError(err) => AccountError::TokenSigning(err.to_string()),
            })?;

        tracing::info!(user_id = %user.id, role = %user.role, "Session issued");

        Ok(IssuedSession {
            user,
            access_token: result.access_token,
        })
    }

    async fn logout(&self, token: &str) -> Result<(), AccountError> {
        let claims = self.verify(token)?;

        let ttl = revocation_ttl(&claims, Utc::now().timestamp());
        self.revocations.revoke(token, ttl).await?;

        tracing::info!(user_id = %claims.sub, ttl_seconds = ttl.as_secs(), "Session revoked");

        Ok(())
    }

    async fn authorize(&self, token: &str) -> Result<SessionClaims, AccountError> {
        if self.revocations.is_revoked(token).await? {
            return Err(AccountError::TokenRevoked);
        }

        self.verify(token)
    }

    async fn change_password(
        &self,
        claims: &SessionClaims,
        command: ChangePasswordCommand,
    ) -> Result<(), AccountError> {
        if command.new_password != command.confirm_new_password {
            return Err(AccountError::NewPasswordConfirmationMismatch);
        }

        let user = self.caller(claims).await?;

        if !self
            .authenticator
            .verify_password(&command.old_password, &user.password_hash)?
        {
            return Err(AccountError::IncorrectOldPassword);
        }

        let password_hash = self.authenticator.hash_password(&command.new_password)?;
        self.repository
            .update_password(&user.id, &password_hash, &claims.full_name)
            .await?;

        tracing::info!(user_id = %user.id, "Password changed");

        Ok(())
    }

    async fn get_profile(&self, claims: &SessionClaims) -> Result<User, AccountError> {
        self.caller(claims).await
    }
}

/// How long a logged-out token must stay revoked.
///
/// Verification still accepts a token during the second named by `exp`, so
/// the entry outlives that second.
fn revocation_ttl(claims: &SessionClaims, now: i64) -> Duration {
    let remaining = claims.remaining_seconds(now).max(0) as u64;
    Duration::from_secs(remaining + 1)
}
