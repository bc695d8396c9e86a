use std::sync::Arc;

use auth::Authenticator;
use commerce_service::config::Config;
use commerce_service::domain::account::service::AccountService;
use commerce_service::domain::product::service::ProductService;
use commerce_service::inbound::grpc::AccountGrpcService;
use commerce_service::inbound::grpc::InterceptorChain;
use commerce_service::inbound::grpc::ProductGrpcService;
use commerce_service::outbound::repositories::PostgresProductRepository;
use commerce_service::outbound::repositories::PostgresUserRepository;
use commerce_service::outbound::revocation::InMemoryRevocationCache;
use commerce_service::outbound::storage::LocalImageStore;
use commerce_service::proto::auth::auth_service_server::AuthServiceServer;
use commerce_service::proto::product::product_service_server::ProductServiceServer;
use sqlx::postgres::PgPoolOptions;
use tonic::transport::Server;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "commerce_service=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "commerce-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        grpc_port = config.server.grpc_port,
        token_validity_hours = config.jwt.expiration_hours,
        image_dir = %config.storage.image_dir,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(
        config.jwt.secret.as_bytes(),
        chrono::Duration::hours(config.jwt.expiration_hours),
    ));
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let product_repository = Arc::new(PostgresProductRepository::new(pg_pool));
    let revocations = Arc::new(InMemoryRevocationCache::new());
    let images = Arc::new(LocalImageStore::new(
        &config.storage.image_dir,
        &config.storage.public_url,
    ));
    tracing::info!(root = %images.root().display(), "Image store ready");

    let account_service = Arc::new(AccountService::new(
        user_repository,
        revocations,
        authenticator,
    ));
    let product_service = Arc::new(ProductService::new(product_repository, images));
    let chain = Arc::new(InterceptorChain::new(Arc::clone(&account_service)));

    let grpc_address = format!("0.0.0.0:{}", config.server.grpc_port).parse()?;
    tracing::info!(
        address = %grpc_address,
        port = config.server.grpc_port,
        protocol = "grpc",
        "gRpc server listening"
    );

    Server::builder()
        .add_service(AuthServiceServer::new(AccountGrpcService::new(
            account_service,
            Arc::clone(&chain),
        )))
        .add_service(ProductServiceServer::new(ProductGrpcService::new(
            product_service,
            chain,
        )))
        .serve_with_shutdown(grpc_address, async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for shutdown signal");
            }
            tracing::info!("Shutdown signal received");
        })
        .await?;

    tracing::info!("Server exited successfully");

    Ok(())
}
