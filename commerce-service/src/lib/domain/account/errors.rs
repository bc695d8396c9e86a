use auth::JwtError;
use auth::PasswordError;
use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all account operations
#[derive(Debug, Clone, Error)]
pub enum AccountError {
    // Rejections rendered to the caller as outcomes
    #[error("Password and confirm password do not match")]
    PasswordConfirmationMismatch,

    #[error("New password and confirm new password do not match")]
    NewPasswordConfirmationMismatch,

    #[error("User with this email already exists")]
    EmailAlreadyExists(String),

    #[error("User with this email does not exist")]
    EmailNotFound(String),

    #[error("User not found")]
    NotFound(String),

    #[error("Old password is incorrect")]
    IncorrectOldPassword,

    // Session errors
    #[error("invalid password")]
    InvalidCredentials,

    #[error("token has been logged out")]
    TokenRevoked,

    #[error("token has expired")]
    TokenExpired,

    #[error("invalid token: {0}")]
    InvalidToken(String),

    // Infrastructure errors
    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token signing failed: {0}")]
    TokenSigning(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl AccountError {
    /// Map a failed token verification onto the session error it represents.
    pub fn from_verification(err: JwtError) -> Self {
        match err {
            JwtError::TokenExpired => AccountError::TokenExpired,
            JwtError::InvalidToken(reason) | JwtError::DecodingFailed(reason) => {
                AccountError::InvalidToken(reason)
            }
            JwtError::EncodingFailed(reason) => AccountError::TokenSigning(reason),
        }
    }
}
