use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::product::errors::ProductIdError;

/// Catalog entry.
///
/// `image_file_name` names a file in the image store, never a path.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_file_name: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
}

impl Product {
    pub fn new(command: CreateProductCommand, created_by: String) -> Self {
        Self {
            id: ProductId::new(),
            name: command.name,
            description: command.description,
            price: command.price,
            image_file_name: command.image_file_name,
            created_at: Utc::now(),
            created_by,
            updated_at: None,
            updated_by: None,
        }
    }

    /// Apply an edit, stamping the update time and actor.
    pub fn edit(&mut self, command: EditProductCommand, updated_by: String) {
        self.name = command.name;
        self.description = command.description;
        self.price = command.price;
        self.image_file_name = command.image_file_name;
        self.updated_at = Some(Utc::now());
        self.updated_by = Some(updated_by);
    }
}

/// Product unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a product ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ProductIdError> {
        Uuid::parse_str(s)
            .map(ProductId)
            .map_err(|e| ProductIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone)]
pub struct CreateProductCommand {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_file_name: String,
}

#[derive(Debug, Clone)]
pub struct EditProductCommand {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_file_name: String,
}

/// A product together with the public URL of its image.
#[derive(Debug, Clone)]
pub struct ProductDetail {
    pub product: Product,
    pub image_url: String,
}
