#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Role;
use commerce_service::account::errors::AccountError;
use commerce_service::account::models::User;
use commerce_service::account::models::UserId;
use commerce_service::account::ports::UserRepository;
use commerce_service::account::service::AccountService;
use commerce_service::inbound::grpc::AccountGrpcService;
use commerce_service::inbound::grpc::InterceptorChain;
use commerce_service::inbound::grpc::ProductGrpcService;
use commerce_service::outbound::revocation::InMemoryRevocationCache;
use commerce_service::outbound::storage::LocalImageStore;
use commerce_service::product::errors::ProductError;
use commerce_service::product::models::Product;
use commerce_service::product::models::ProductId;
use commerce_service::product::ports::ProductRepository;
use commerce_service::product::service::ProductService;
use commerce_service::proto::auth::auth_service_server::AuthService;
use commerce_service::proto::auth::LoginRequest;
use commerce_service::proto::auth::RegisterRequest;
use tempfile::TempDir;
use tonic::Request;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const PUBLIC_URL: &str = "http://localhost:3000/storage";

pub type Accounts = AccountService<InMemoryUserRepository, InMemoryRevocationCache>;
pub type Products = ProductService<InMemoryProductRepository, LocalImageStore>;

/// User store keyed by id, enforcing unique emails like the database does.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AccountError> {
        let users = self.users.lock().unwrap();
        Ok(users
            .values()
            .find(|user| user.email == email && !user.is_deleted)
            .cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AccountError> {
        let users = self.users.lock().unwrap();
        Ok(users.get(id).filter(|user| !user.is_deleted).cloned())
    }

    async fn create(&self, user: User) -> Result<User, AccountError> {
        let mut users = self.users.lock().unwrap();
        if users.values().any(|existing| existing.email == user.email) {
            return Err(AccountError::EmailAlreadyExists(user.email));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update_password(
        &self,
        id: &UserId,
        password_hash: &str,
        updated_by: &str,
    ) -> Result<(), AccountError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(id)
            .ok_or_else(|| AccountError::NotFound(id.to_string()))?;
        user.password_hash = password_hash.to_string();
        user.updated_at = Some(chrono::Utc::now());
        user.updated_by = Some(updated_by.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryProductRepository {
    products: Mutex<HashMap<ProductId, Product>>,
}

impl InMemoryProductRepository {
    pub fn get(&self, id: &ProductId) -> Option<Product> {
        self.products.lock().unwrap().get(id).cloned()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: Product) -> Result<Product, ProductError> {
        self.products
            .lock()
            .unwrap()
            .insert(product.id, product.clone());
        Ok(product)
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductError> {
        Ok(self.get(id))
    }

    async fn update(&self, product: Product) -> Result<Product, ProductError> {
        let mut products = self.products.lock().unwrap();
        match products.get_mut(&product.id) {
            Some(stored) => {
                *stored = product.clone();
                Ok(product)
            }
            None => Err(ProductError::NotFound(product.id.to_string())),
        }
    }
}

/// Both gRPC services wired over in-memory stores and a temporary image
/// directory.
pub struct TestApp {
    pub auth: AccountGrpcService<Accounts>,
    pub products: ProductGrpcService<Accounts, Products>,
    pub users: Arc<InMemoryUserRepository>,
    pub product_store: Arc<InMemoryProductRepository>,
    pub authenticator: Arc<Authenticator>,
    pub images: TempDir,
}

impl TestApp {
    pub fn spawn() -> Self {
        let images = tempfile::tempdir().expect("Failed to create image dir");

        let authenticator = Arc::new(Authenticator::new(
            JWT_SECRET,
            chrono::Duration::hours(24),
        ));
        let users = Arc::new(InMemoryUserRepository::default());
        let product_store = Arc::new(InMemoryProductRepository::default());
        let revocations = Arc::new(InMemoryRevocationCache::new());
        let image_store = Arc::new(LocalImageStore::new(images.path(), PUBLIC_URL));

        let accounts = Arc::new(AccountService::new(
            Arc::clone(&users),
            revocations,
            Arc::clone(&authenticator),
        ));
        let catalog = Arc::new(ProductService::new(Arc::clone(&product_store), image_store));
        let chain = Arc::new(InterceptorChain::new(Arc::clone(&accounts)));

        Self {
            auth: AccountGrpcService::new(accounts, Arc::clone(&chain)),
            products: ProductGrpcService::new(catalog, chain),
            users,
            product_store,
            authenticator,
            images,
        }
    }

    /// Place an uploaded image in the store directory.
    pub fn upload_image(&self, file_name: &str) {
        std::fs::write(self.images.path().join(file_name), b"\x89PNG")
            .expect("Failed to write image");
    }

    pub fn image_exists(&self, file_name: &str) -> bool {
        self.images.path().join(file_name).exists()
    }

    pub async fn register(&self, email: &str, password: &str, full_name: &str) {
        let response = self
            .auth
            .register(Request::new(RegisterRequest {
                full_name: full_name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
                confirm_password: password.to_string(),
            }))
            .await
            .expect("register failed")
            .into_inner();
        assert_eq!(response.base.expect("missing base").status_code, 200);
    }

    /// Store an admin account directly; self-registration only yields customers.
    pub async fn seed_admin(&self, email: &str, password: &str, full_name: &str) {
        let mut user = User::register(
            email.to_string(),
            self.authenticator
                .hash_password(password)
                .expect("hash failed"),
            full_name.to_string(),
        );
        user.role = Role::Admin;
        self.users.create(user).await.expect("seed failed");
    }

    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .auth
            .login(Request::new(LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            }))
            .await
            .expect("login failed")
            .into_inner();
        assert_eq!(response.base.expect("missing base").status_code, 200);
        response.access_token
    }
}

/// Wrap a message with `authorization: Bearer <token>` metadata.
pub fn with_bearer<T>(message: T, token: &str) -> Request<T> {
    with_authorization(message, &format!("Bearer {}", token))
}

pub fn with_authorization<T>(message: T, value: &str) -> Request<T> {
    let mut request = Request::new(message);
    request
        .metadata_mut()
        .insert("authorization", value.parse().expect("invalid metadata"));
    request
}
