use std::any::Any;
use std::collections::HashSet;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tonic::metadata::MetadataMap;
use tonic::Code;
use tonic::Request;
use tonic::Response;
use tonic::Status;
use tracing::Instrument;

use super::context::CallContext;
use super::context::Session;
use super::handlers::account_status;
use super::metadata::bearer_token;
use crate::domain::account::ports::AccountServicePort;

/// Fully qualified gRPC method paths.
pub mod methods {
    pub const REGISTER: &str = "/auth.AuthService/Register";
    pub const LOGIN: &str = "/auth.AuthService/Login";
    pub const LOGOUT: &str = "/auth.AuthService/Logout";
    pub const CHANGE_PASSWORD: &str = "/auth.AuthService/ChangePassword";
    pub const GET_PROFILE: &str = "/auth.AuthService/GetProfile";

    pub const CREATE_PRODUCT: &str = "/product.ProductService/CreateProduct";
    pub const DETAIL_PRODUCT: &str = "/product.ProductService/DetailProduct";
    pub const EDIT_PRODUCT: &str = "/product.ProductService/EditProduct";
}

const INTERNAL_ERROR: &str = "Internal server error";

/// Wraps every unary call: recovery outermost, then authentication, then
/// the handler.
pub struct InterceptorChain<A>
where
    A: AccountServicePort,
{
    accounts: Arc<A>,
    public_methods: HashSet<&'static str>,
}

impl<A> InterceptorChain<A>
where
    A: AccountServicePort,
{
    /// Chain where only registration and login skip authentication.
    pub fn new(accounts: Arc<A>) -> Self {
        Self {
            accounts,
            public_methods: HashSet::from([methods::REGISTER, methods::LOGIN]),
        }
    }

    /// Run `handler` for `method` inside the chain.
    ///
    /// Client-facing error kinds pass through unchanged. Any other error, and
    /// any panic, is logged and replaced with a generic internal error.
    pub async fn call<Req, Res, F, Fut>(
        &self,
        method: &'static str,
        request: Request<Req>,
        handler: F,
    ) -> Result<Response<Res>, Status>
    where
        Req: Send,
        Res: Send,
        F: FnOnce(CallContext, Req) -> Fut + Send,
        Fut: Future<Output = Result<Res, Status>> + Send,
    {
        let span = tracing::info_span!("grpc_call", method);

        async move {
            let pipeline = async {
                let (metadata, _, message) = request.into_parts();
                let context = self.authenticate(method, &metadata).await?;
                handler(context, message).await
            };

            match AssertUnwindSafe(pipeline).catch_unwind().await {
                Ok(Ok(message)) => Ok(Response::new(message)),
                Ok(Err(status)) => Err(recover(status)),
                Err(panic) => {
                    tracing::error!(panic = %panic_message(panic.as_ref()), "Recovered from panic");
                    Err(Status::internal(INTERNAL_ERROR))
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn authenticate(
        &self,
        method: &str,
        metadata: &MetadataMap,
    ) -> Result<CallContext, Status> {
        if self.public_methods.contains(method) {
            return Ok(CallContext::Anonymous);
        }

        let token = bearer_token(metadata)?.to_string();
        let claims = self
            .accounts
            .authorize(&token)
            .await
            .map_err(account_status)?;

        tracing::debug!(user_id = %claims.sub, role = %claims.role, "Caller authenticated");

        Ok(CallContext::Authenticated(Session { token, claims }))
    }
}

fn recover(status: Status) -> Status {
    match status.code() {
        Code::Unauthenticated | Code::PermissionDenied | Code::InvalidArgument | Code::NotFound => {
            tracing::info!(code = ?status.code(), status_message = status.message(), "Request rejected");
            status
        }
        code => {
            tracing::error!(code = ?code, status_message = status.message(), "Request failed");
            Status::internal(INTERNAL_ERROR)
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message
    } else {
        "unknown panic payload"
    }
}
