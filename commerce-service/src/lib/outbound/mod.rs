pub mod repositories;
pub mod revocation;
pub mod storage;
