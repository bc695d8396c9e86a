use tonic::Status;

use crate::domain::product::models::CreateProductCommand;
use crate::domain::product::ports::ProductServicePort;
use crate::inbound::grpc::context::CallContext;
use crate::inbound::grpc::handlers::product_rejection;
use crate::inbound::grpc::outcome;
use crate::proto::product::CreateProductRequest;
use crate::proto::product::CreateProductResponse;

pub async fn create_product<P: ProductServicePort>(
    products: &P,
    context: CallContext,
    request: CreateProductRequest,
) -> Result<CreateProductResponse, Status> {
    let session = context.session()?;
    let command = CreateProductCommand {
        name: request.name,
        description: request.description,
        price: request.price,
        image_file_name: request.image_file_name,
    };

    match products.create_product(&session.claims, command).await {
        Ok(product) => Ok(CreateProductResponse {
            base: Some(outcome::success("Product created successfully")),
            id: product.id.to_string(),
        }),
        Err(e) => Ok(CreateProductResponse {
            base: Some(product_rejection(e)?),
            id: String::new(),
        }),
    }
}
