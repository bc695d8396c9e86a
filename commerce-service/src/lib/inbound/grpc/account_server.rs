use std::sync::Arc;

use tonic::Request;
use tonic::Response;
use tonic::Status;

use super::handlers::account::change_password;
use super::handlers::account::get_profile;
use super::handlers::account::login;
use super::handlers::account::logout;
use super::handlers::account::register;
use super::interceptor::methods;
use super::interceptor::InterceptorChain;
use crate::domain::account::ports::AccountServicePort;
use crate::proto::auth::auth_service_server::AuthService as AuthServiceProto;
use crate::proto::auth::ChangePasswordRequest;
use crate::proto::auth::ChangePasswordResponse;
use crate::proto::auth::GetProfileRequest;
use crate::proto::auth::GetProfileResponse;
use crate::proto::auth::LoginRequest;
use crate::proto::auth::LoginResponse;
use crate::proto::auth::LogoutRequest;
use crate::proto::auth::LogoutResponse;
use crate::proto::auth::RegisterRequest;
use crate::proto::auth::RegisterResponse;

pub struct AccountGrpcService<A>
where
    A: AccountServicePort,
{
    accounts: Arc<A>,
    chain: Arc<InterceptorChain<A>>,
}

impl<A> AccountGrpcService<A>
where
    A: AccountServicePort,
{
    pub fn new(accounts: Arc<A>, chain: Arc<InterceptorChain<A>>) -> Self {
        Self { accounts, chain }
    }
}

#[tonic::async_trait]
impl<A> AuthServiceProto for AccountGrpcService<A>
where
    A: AccountServicePort,
{
    async fn register(
        &self,
        request: Request<RegisterRequest>,
    ) -> Result<Response<RegisterResponse>, Status> {
        let accounts = Arc::clone(&self.accounts);
        self.chain
            .call(methods::REGISTER, request, |_, message| async move {
                register::register(accounts.as_ref(), message).await
            })
            .await
    }

    async fn login(
        &self,
        request: Request<LoginRequest>,
    ) -> Result<Response<LoginResponse>, Status> {
        let accounts = Arc::clone(&self.accounts);
        self.chain
            .call(methods::LOGIN, request, |_, message| async move {
                login::login(accounts.as_ref(), message).await
            })
            .await
    }

    async fn logout(
        &self,
        request: Request<LogoutRequest>,
    ) -> Result<Response<LogoutResponse>, Status> {
        let accounts = Arc::clone(&self.accounts);
        self.chain
            .call(methods::LOGOUT, request, |context, _| async move {
                logout::logout(accounts.as_ref(), context).await
            })
            .await
    }

    async fn change_password(
        &self,
        request: Request<ChangePasswordRequest>,
    ) -> Result<Response<ChangePasswordResponse>, Status> {
        let accounts = Arc::clone(&self.accounts);
        self.chain
            .call(methods::CHANGE_PASSWORD, request, |context, message| async move {
                change_password::change_password(accounts.as_ref(), context, message).await
            })
            .await
    }

    async fn get_profile(
        &self,
        request: Request<GetProfileRequest>,
    ) -> Result<Response<GetProfileResponse>, Status> {
        let accounts = Arc::clone(&self.accounts);
        self.chain
            .call(methods::GET_PROFILE, request, |context, _| async move {
                get_profile::get_profile(accounts.as_ref(), context).await
            })
            .await
    }
}
