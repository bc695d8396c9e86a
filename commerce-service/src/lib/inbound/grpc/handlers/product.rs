use crate::domain::product::models::ProductDetail;
use crate::proto::product::DetailProductResponse;

pub mod create_product;
pub mod detail_product;
pub mod edit_product;

impl From<ProductDetail> for DetailProductResponse {
    fn from(detail: ProductDetail) -> Self {
        Self {
            base: None,
            id: detail.product.id.to_string(),
            name: detail.product.name,
            description: detail.product.description,
            price: detail.product.price,
            image_file_url: detail.image_url,
        }
    }
}
