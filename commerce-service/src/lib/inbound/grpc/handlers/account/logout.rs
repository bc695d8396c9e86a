use tonic::Status;

use crate::domain::account::ports::AccountServicePort;
use crate::inbound::grpc::context::CallContext;
use crate::inbound::grpc::handlers::account_rejection;
use crate::inbound::grpc::outcome;
use crate::proto::auth::LogoutResponse;

/// End the session whose token authenticated this call.
pub async fn logout<A: AccountServicePort>(
    accounts: &A,
    context: CallContext,
) -> Result<LogoutResponse, Status> {
    let session = context.session()?;

    let base = match accounts.logout(&session.token).await {
        Ok(()) => outcome::success("Logout successful"),
        Err(e) => account_rejection(e)?,
    };

    Ok(LogoutResponse { base: Some(base) })
}
