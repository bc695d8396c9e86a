use tonic::Status;

use crate::domain::account::models::LoginCommand;
use crate::domain::account::ports::AccountServicePort;
use crate::inbound::grpc::handlers::account_rejection;
use crate::inbound::grpc::outcome;
use crate::proto::auth::LoginRequest;
use crate::proto::auth::LoginResponse;

pub async fn login<A: AccountServicePort>(
    accounts: &A,
    request: LoginRequest,
) -> Result<LoginResponse, Status> {
    let command = LoginCommand {
        email: request.email,
        password: request.password,
    };

    match accounts.login(command).await {
        Ok(session) => Ok(LoginResponse {
            base: Some(outcome::success("Login successful")),
            access_token: session.access_token,
        }),
        Err(e) => Ok(LoginResponse {
            base: Some(account_rejection(e)?),
            access_token: String::new(),
        }),
    }
}
