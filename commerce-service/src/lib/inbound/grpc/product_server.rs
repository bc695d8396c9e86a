use std::sync::Arc;

use tonic::Request;
use tonic::Response;
use tonic::Status;

use super::handlers::product::create_product;
use super::handlers::product::detail_product;
use super::handlers::product::edit_product;
use super::interceptor::methods;
use super::interceptor::InterceptorChain;
use crate::domain::account::ports::AccountServicePort;
use crate::domain::product::ports::ProductServicePort;
use crate::proto::product::product_service_server::ProductService as ProductServiceProto;
use crate::proto::product::CreateProductRequest;
use crate::proto::product::CreateProductResponse;
use crate::proto::product::DetailProductRequest;
use crate::proto::product::DetailProductResponse;
use crate::proto::product::EditProductRequest;
use crate::proto::product::EditProductResponse;

pub struct ProductGrpcService<A, P>
where
    A: AccountServicePort,
    P: ProductServicePort,
{
    products: Arc<P>,
    chain: Arc<InterceptorChain<A>>,
}

impl<A, P> ProductGrpcService<A, P>
where
    A: AccountServicePort,
    P: ProductServicePort,
{
    pub fn new(products: Arc<P>, chain: Arc<InterceptorChain<A>>) -> Self {
        Self { products, chain }
    }
}

#[tonic::async_trait]
impl<A, P> ProductServiceProto for ProductGrpcService<A, P>
where
    A: AccountServicePort,
    P: ProductServicePort,
{
    async fn create_product(
        &self,
        request: Request<CreateProductRequest>,
    ) -> Result<Response<CreateProductResponse>, Status> {
        let products = Arc::clone(&self.products);
        self.chain
            .call(methods::CREATE_PRODUCT, request, |context, message| async move {
                create_product::create_product(products.as_ref(), context, message).await
            })
            .await
    }

    async fn detail_product(
        &self,
        request: Request<DetailProductRequest>,
    ) -> Result<Response<DetailProductResponse>, Status> {
        let products = Arc::clone(&self.products);
        self.chain
            .call(methods::DETAIL_PRODUCT, request, |_, message| async move {
                detail_product::detail_product(products.as_ref(), message).await
            })
            .await
    }

    async fn edit_product(
        &self,
        request: Request<EditProductRequest>,
    ) -> Result<Response<EditProductResponse>, Status> {
        let products = Arc::clone(&self.products);
        self.chain
            .call(methods::EDIT_PRODUCT, request, |context, message| async move {
                edit_product::edit_product(products.as_ref(), context, message).await
            })
            .await
    }
}
