use tonic::Status;

use crate::domain::account::models::RegisterCommand;
use crate::domain::account::ports::AccountServicePort;
use crate::inbound::grpc::handlers::account_rejection;
use crate::inbound::grpc::outcome;
use crate::proto::auth::RegisterRequest;
use crate::proto::auth::RegisterResponse;

pub async fn register<A: AccountServicePort>(
    accounts: &A,
    request: RegisterRequest,
) -> Result<RegisterResponse, Status> {
    let command = RegisterCommand {
        email: request.email,
        password: request.password,
        confirm_password: request.confirm_password,
        full_name: request.full_name,
    };

    let base = match accounts.register(command).await {
        Ok(_) => outcome::success("User registered successfully"),
        Err(e) => account_rejection(e)?,
    };

    Ok(RegisterResponse { base: Some(base) })
}
