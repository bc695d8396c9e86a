use std::sync::Arc;

use async_trait::async_trait;
use auth::SessionClaims;

use crate::domain::product::errors::ProductError;
use crate::domain::product::models::CreateProductCommand;
use crate::domain::product::models::EditProductCommand;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductDetail;
use crate::domain::product::models::ProductId;
use crate::domain::product::ports::ImageStore;
use crate::domain::product::ports::ProductRepository;
use crate::domain::product::ports::ProductServicePort;

/// Domain service implementation for catalog operations.
pub struct ProductService<PR, IS>
where
    PR: ProductRepository,
    IS: ImageStore,
{
    repository: Arc<PR>,
    images: Arc<IS>,
}

impl<PR, IS> ProductService<PR, IS>
where
    PR: ProductRepository,
    IS: ImageStore,
{
    pub fn new(repository: Arc<PR>, images: Arc<IS>) -> Self {
        Self { repository, images }
    }
}

fn require_admin(claims: &SessionClaims, action: &'static str) -> Result<(), ProductError> {
    if claims.is_admin() {
        Ok(())
    } else {
        Err(ProductError::AdminRequired(action))
    }
}

#[async_trait]
impl<PR, IS> ProductServicePort for ProductService<PR, IS>
where
    PR: ProductRepository,
    IS: ImageStore,
{
    async fn create_product(
        &self,
        claims: &SessionClaims,
        command: CreateProductCommand,
    ) -> Result<Product, ProductError> {
        require_admin(claims, "create")?;

        if !self.images.exists(&command.image_file_name).await? {
            return Err(ProductError::ImageNotFound(command.image_file_name));
        }

        let product = Product::new(command, claims.full_name.clone());
        let created = self.repository.create(product).await?;

        tracing::info!(product_id = %created.id, created_by = %created.created_by, "Product created");

        Ok(created)
    }

    async fn get_product(&self, id: &ProductId) -> Result<ProductDetail, ProductError> {
        let product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;

        let image_url = self.images.public_url(&product.image_file_name);

        Ok(ProductDetail { product, image_url })
    }

    async fn edit_product(
        &self,
        claims: &SessionClaims,
        id: &ProductId,
        command: EditProductCommand,
    ) -> Result<Product, ProductError> {
        require_admin(claims, "update")?;

        let mut product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;

        let replaced_image = if product.image_file_name != command.image_file_name {
            if !self.images.exists(&command.image_file_name).await? {
                return Err(ProductError::ReplacementImageNotFound(
                    command.image_file_name,
                ));
            }
            Some(product.image_file_name.clone())
        } else {
            None
        };

        product.edit(command, claims.full_name.clone());
        let updated = self.repository.update(product).await?;

        // The row no longer references the old file; a failed removal only leaks it.
        if let Some(old_image) = replaced_image {
            if let Err(e) = self.images.remove(&old_image).await {
                tracing::warn!(product_id = %updated.id, image = %old_image, error = %e, "Failed to remove replaced image");
            }
        }

        tracing::info!(product_id = %updated.id, "Product updated");

        Ok(updated)
    }
}
