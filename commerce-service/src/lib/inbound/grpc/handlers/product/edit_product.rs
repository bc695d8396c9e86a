use tonic::Status;

use crate::domain::product::errors::ProductError;
use crate::domain::product::models::EditProductCommand;
use crate::domain::product::models::ProductId;
use crate::domain::product::ports::ProductServicePort;
use crate::inbound::grpc::context::CallContext;
use crate::inbound::grpc::handlers::product_rejection;
use crate::inbound::grpc::outcome;
use crate::proto::product::EditProductRequest;
use crate::proto::product::EditProductResponse;

pub async fn edit_product<P: ProductServicePort>(
    products: &P,
    context: CallContext,
    request: EditProductRequest,
) -> Result<EditProductResponse, Status> {
    let session = context.session()?;
    let command = EditProductCommand {
        name: request.name,
        description: request.description,
        price: request.price,
        image_file_name: request.image_file_name,
    };

    let result = match ProductId::from_string(&request.id) {
        Ok(id) => products.edit_product(&session.claims, &id, command).await,
        Err(e) => Err(ProductError::from(e)),
    };

    match result {
        Ok(product) => Ok(EditProductResponse {
            base: Some(outcome::success("Edit product successfully")),
            id: product.id.to_string(),
        }),
        Err(e) => Ok(EditProductResponse {
            base: Some(product_rejection(e)?),
            id: request.id,
        }),
    }
}
