use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Role carried by a user account and embedded in its session tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Role::Customer),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

/// Identity claims bound to a session token.
///
/// Constructed at login, embedded in the signed token and recovered on every
/// authenticated call. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClaims {
    /// Subject (user identifier)
    pub sub: String,

    /// Issued at (Unix timestamp, seconds)
    pub iat: i64,

    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,

    pub email: String,

    pub full_name: String,

    pub role: Role,
}

impl SessionClaims {
    /// Create claims for a user, valid from now for `validity`.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `email` - Email address of the account
    /// * `full_name` - Display name of the account
    /// * `role` - Role of the account
    /// * `validity` - Lifetime of the session
    pub fn for_user(
        user_id: impl ToString,
        email: impl Into<String>,
        full_name: impl Into<String>,
        role: Role,
        validity: Duration,
    ) -> Self {
        let now = Utc::now();

        Self {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + validity).timestamp(),
            email: email.into(),
            full_name: full_name.into(),
            role,
        }
    }

    /// Seconds left before the session expires, relative to `current_timestamp`.
    ///
    /// Zero or negative once the session has expired.
    pub fn remaining_seconds(&self, current_timestamp: i64) -> i64 {
        self.exp - current_timestamp
    }

    /// Check if the session is expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
