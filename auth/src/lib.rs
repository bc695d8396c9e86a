//! Authentication utilities library
//!
//! Provides the credential and session primitives of the commerce backend:
//! - Password hashing (Argon2id, fixed parameters)
//! - HMAC-signed session tokens carrying [`SessionClaims`]
//! - Authentication coordination
//!
//! Session revocation and transport concerns live in the service crate.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! assert!(!hasher.verify("other_password", &hash).unwrap());
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, Role, SessionClaims};
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(24));
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let claims = SessionClaims::for_user(
//!     "user123",
//!     "alice@example.com",
//!     "Alice",
//!     Role::Customer,
//!     auth.token_validity(),
//! );
//! let result = auth.authenticate("password123", &hash, &claims).unwrap();
//!
//! // Every later call: verify token
//! let decoded = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(decoded.role, Role::Customer);
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::Role;
pub use jwt::SessionClaims;
pub use password::PasswordError;
pub use password::PasswordHasher;
