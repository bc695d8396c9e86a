use tonic::Status;

use crate::domain::account::ports::AccountServicePort;
use crate::inbound::grpc::context::CallContext;
use crate::inbound::grpc::handlers::account_rejection;
use crate::inbound::grpc::outcome;
use crate::proto::auth::GetProfileResponse;

pub async fn get_profile<A: AccountServicePort>(
    accounts: &A,
    context: CallContext,
) -> Result<GetProfileResponse, Status> {
    let session = context.session()?;

    match accounts.get_profile(&session.claims).await {
        Ok(user) => Ok(GetProfileResponse {
            base: Some(outcome::success("Get profile successfully")),
            user_id: user.id.to_string(),
            full_name: user.full_name,
            email: user.email,
            role_code: user.role.to_string(),
            member_since: user.created_at.to_rfc3339(),
        }),
        Err(e) => Ok(GetProfileResponse {
            base: Some(account_rejection(e)?),
            ..Default::default()
        }),
    }
}
