use tonic::Status;

use crate::domain::account::models::ChangePasswordCommand;
use crate::domain::account::ports::AccountServicePort;
use crate::inbound::grpc::context::CallContext;
use crate::inbound::grpc::handlers::account_rejection;
use crate::inbound::grpc::outcome;
use crate::proto::auth::ChangePasswordRequest;
use crate::proto::auth::ChangePasswordResponse;

pub async fn change_password<A: AccountServicePort>(
    accounts: &A,
    context: CallContext,
    request: ChangePasswordRequest,
) -> Result<ChangePasswordResponse, Status> {
    let session = context.session()?;
    let command = ChangePasswordCommand {
        old_password: request.old_password,
        new_password: request.new_password,
        confirm_new_password: request.confirm_new_password,
    };

    let base = match accounts.change_password(&session.claims, command).await {
        Ok(()) => outcome::success("Password changed successfully"),
        Err(e) => account_rejection(e)?,
    };

    Ok(ChangePasswordResponse { base: Some(base) })
}
