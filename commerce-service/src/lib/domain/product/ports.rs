use async_trait::async_trait;
use auth::SessionClaims;

use crate::domain::product::errors::ProductError;
use crate::domain::product::models::CreateProductCommand;
use crate::domain::product::models::EditProductCommand;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductDetail;
use crate::domain::product::models::ProductId;

/// Port for catalog operations.
#[async_trait]
pub trait ProductServicePort: Send + Sync + 'static {
    /// Create a product on behalf of an admin.
    ///
    /// # Errors
    /// * `AdminRequired` - Caller is not an admin
    /// * `ImageNotFound` - Referenced image is not in the image store
    /// * `DatabaseError` - Database operation failed
    async fn create_product(
        &self,
        claims: &SessionClaims,
        command: CreateProductCommand,
    ) -> Result<Product, ProductError>;

    /// Retrieve a product with its public image URL.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_product(&self, id: &ProductId) -> Result<ProductDetail, ProductError>;

    /// Replace a product's fields on behalf of an admin.
    ///
    /// When the image changes, the new one must exist and the old one is removed.
    ///
    /// # Errors
    /// * `AdminRequired` - Caller is not an admin
    /// * `NotFound` - Product does not exist
    /// * `ReplacementImageNotFound` - New image is not in the image store
    /// * `DatabaseError` - Database operation failed
    async fn edit_product(
        &self,
        claims: &SessionClaims,
        id: &ProductId,
        command: EditProductCommand,
    ) -> Result<Product, ProductError>;
}

/// Persistence operations for products.
#[async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    async fn create(&self, product: Product) -> Result<Product, ProductError>;

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductError>;

    /// Overwrite the stored product's mutable fields.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, product: Product) -> Result<Product, ProductError>;
}

/// Storage holding uploaded product images, addressed by file name.
#[async_trait]
pub trait ImageStore: Send + Sync + 'static {
    async fn exists(&self, file_name: &str) -> Result<bool, ProductError>;

    async fn remove(&self, file_name: &str) -> Result<(), ProductError>;

    /// Public URL at which the image is served.
    fn public_url(&self, file_name: &str) -> String;
}
