use std::time::Duration;

use async_trait::async_trait;
use auth::SessionClaims;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::ChangePasswordCommand;
use crate::domain::account::models::IssuedSession;
use crate::domain::account::models::LoginCommand;
use crate::domain::account::models::RegisterCommand;
use crate::domain::account::models::User;
use crate::domain::account::models::UserId;

/// Port for account and session operations.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Register a new customer account.
    ///
    /// # Errors
    /// * `PasswordConfirmationMismatch` - Password and confirmation differ (nothing is stored)
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Password` - Password hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterCommand) -> Result<User, AccountError>;

    /// Verify credentials and mint a session token.
    ///
    /// # Errors
    /// * `EmailNotFound` - No account with this email
    /// * `InvalidCredentials` - Password does not match
    /// * `Password` - Stored hash could not be checked
    /// * `TokenSigning` - Token signing failed
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, command: LoginCommand) -> Result<IssuedSession, AccountError>;

    /// Revoke a still-valid token for the rest of its lifetime.
    ///
    /// Logging out the same token again refreshes the revocation.
    ///
    /// # Errors
    /// * `TokenExpired` / `InvalidToken` - Token does not verify
    async fn logout(&self, token: &str) -> Result<(), AccountError>;

    /// Resolve the claims of a presented token.
    ///
    /// Revocation is checked before the signature.
    ///
    /// # Errors
    /// * `TokenRevoked` - Token was logged out
    /// * `TokenExpired` / `InvalidToken` - Token does not verify
    async fn authorize(&self, token: &str) -> Result<SessionClaims, AccountError>;

    /// Replace the caller's password.
    ///
    /// # Errors
    /// * `NewPasswordConfirmationMismatch` - New password and confirmation differ
    /// * `IncorrectOldPassword` - Old password does not match
    /// * `NotFound` - Caller's account no longer exists
    /// * `DatabaseError` - Database operation failed
    async fn change_password(
        &self,
        claims: &SessionClaims,
        command: ChangePasswordCommand,
    ) -> Result<(), AccountError>;

    /// Load the caller's account.
    ///
    /// # Errors
    /// * `NotFound` - Caller's account no longer exists
    /// * `DatabaseError` - Database operation failed
    async fn get_profile(&self, claims: &SessionClaims) -> Result<User, AccountError>;
}

/// Persistence operations for user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Retrieve a live account by exact email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AccountError>;

    /// Retrieve a live account by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AccountError>;

    /// Persist a new account.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - The store's uniqueness constraint rejected the email
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, AccountError>;

    /// Store a new password hash, stamping the update time and actor.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_password(
        &self,
        id: &UserId,
        password_hash: &str,
        updated_by: &str,
    ) -> Result<(), AccountError>;
}

/// Record of tokens invalidated before their natural expiry.
#[async_trait]
pub trait TokenRevocationStore: Send + Sync + 'static {
    /// Mark `token` revoked for `ttl`. A repeated call replaces the entry.
    async fn revoke(&self, token: &str, ttl: Duration) -> Result<(), AccountError>;

    async fn is_revoked(&self, token: &str) -> Result<bool, AccountError>;
}
