use thiserror::Error;

/// Error for ProductId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProductIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all product operations
#[derive(Debug, Clone, Error)]
pub enum ProductError {
    #[error("only admin can {0} product")]
    AdminRequired(&'static str),

    #[error("Product not found")]
    NotFound(String),

    /// Image referenced on create is missing from the store.
    #[error("image file not found")]
    ImageNotFound(String),

    /// Image swapped in on edit is missing from the store.
    #[error("Image not found")]
    ReplacementImageNotFound(String),

    #[error("Invalid product ID: {0}")]
    InvalidProductId(#[from] ProductIdError),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Image store error: {0}")]
    ImageStore(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
