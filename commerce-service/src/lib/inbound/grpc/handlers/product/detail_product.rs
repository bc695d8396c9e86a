use tonic::Status;

use crate::domain::product::errors::ProductError;
use crate::domain::product::models::ProductId;
use crate::domain::product::ports::ProductServicePort;
use crate::inbound::grpc::handlers::product_rejection;
use crate::inbound::grpc::outcome;
use crate::proto::product::DetailProductRequest;
use crate::proto::product::DetailProductResponse;

/// Any authenticated caller may read a product; no role is required.
pub async fn detail_product<P: ProductServicePort>(
    products: &P,
    request: DetailProductRequest,
) -> Result<DetailProductResponse, Status> {
    let result = match ProductId::from_string(&request.id) {
        Ok(id) => products.get_product(&id).await,
        Err(e) => Err(ProductError::from(e)),
    };

    match result {
        Ok(detail) => Ok(DetailProductResponse {
            base: Some(outcome::success("Get product detail successfully")),
            ..DetailProductResponse::from(detail)
        }),
        Err(e) => Ok(DetailProductResponse {
            base: Some(product_rejection(e)?),
            ..Default::default()
        }),
    }
}
