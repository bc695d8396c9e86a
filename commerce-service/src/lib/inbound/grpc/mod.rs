pub mod account_server;
pub mod context;
pub mod handlers;
pub mod interceptor;
pub mod metadata;
pub mod outcome;
pub mod product_server;

pub use account_server::AccountGrpcService;
pub use interceptor::InterceptorChain;
pub use product_server::ProductGrpcService;
