pub mod claims;
pub mod errors;
pub mod handler;

pub use claims::Role;
pub use claims::SessionClaims;
pub use errors::JwtError;
pub use handler::JwtHandler;
