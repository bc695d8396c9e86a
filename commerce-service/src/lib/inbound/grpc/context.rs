use auth::SessionClaims;
use tonic::Status;

/// Verified session attached to an authenticated call.
#[derive(Debug, Clone)]
pub struct Session {
    /// Raw bearer token as presented by the caller.
    pub token: String,
    pub claims: SessionClaims,
}

/// What the interceptor chain learned about the caller, handed to every
/// handler by parameter.
#[derive(Debug, Clone)]
pub enum CallContext {
    /// Method bypasses authentication.
    Anonymous,
    Authenticated(Session),
}

impl CallContext {
    pub fn session(&self) -> Result<&Session, Status> {
        match self {
            CallContext::Authenticated(session) => Ok(session),
            CallContext::Anonymous => Err(Status::unauthenticated(
                "unauthenticated: no JWT claims found in context",
            )),
        }
    }
}
