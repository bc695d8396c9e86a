use tonic::Status;

use super::outcome;
use crate::domain::account::errors::AccountError;
use crate::domain::product::errors::ProductError;
use crate::proto::common::BaseResponse;

pub mod account;
pub mod product;

/// Transport status for account errors that are not user-facing outcomes.
pub fn account_status(err: AccountError) -> Status {
    match err {
        AccountError::TokenRevoked => Status::permission_denied(err.to_string()),
        AccountError::TokenExpired
        | AccountError::InvalidToken(_)
        | AccountError::InvalidCredentials => Status::unauthenticated(err.to_string()),
        err => Status::internal(err.to_string()),
    }
}

/// Render an account error as an outcome when the caller is meant to see it,
/// otherwise as a transport status.
pub fn account_rejection(err: AccountError) -> Result<BaseResponse, Status> {
    match err {
        AccountError::PasswordConfirmationMismatch
        | AccountError::NewPasswordConfirmationMismatch
        | AccountError::EmailAlreadyExists(_)
        | AccountError::EmailNotFound(_)
        | AccountError::IncorrectOldPassword => Ok(outcome::bad_request(err.to_string())),
        AccountError::NotFound(_) => Ok(outcome::not_found(err.to_string())),
        err => Err(account_status(err)),
    }
}

pub fn product_rejection(err: ProductError) -> Result<BaseResponse, Status> {
    match err {
        ProductError::AdminRequired(_)
        | ProductError::ImageNotFound(_)
        | ProductError::InvalidProductId(_) => Ok(outcome::bad_request(err.to_string())),
        ProductError::NotFound(_) | ProductError::ReplacementImageNotFound(_) => {
            Ok(outcome::not_found(err.to_string()))
        }
        err => Err(Status::internal(err.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use tonic::Code;

    use super::*;

    #[test]
    fn test_account_outcomes() {
        let base = account_rejection(AccountError::EmailAlreadyExists("a@x.com".into())).unwrap();
        assert_eq!(base.status_code, 400);
        assert!(base.is_error);
        assert_eq!(base.message, "User with this email already exists");

        let base = account_rejection(AccountError::NotFound("id".into())).unwrap();
        assert_eq!(base.status_code, 404);
        assert_eq!(base.message, "User not found");
    }

    #[test]
    fn test_account_statuses() {
        let status = account_rejection(AccountError::InvalidCredentials).unwrap_err();
        assert_eq!(status.code(), Code::Unauthenticated);
        assert_eq!(status.message(), "invalid password");

        let status = account_rejection(AccountError::TokenRevoked).unwrap_err();
        assert_eq!(status.code(), Code::PermissionDenied);

        let status = account_status(AccountError::TokenExpired);
        assert_eq!(status.code(), Code::Unauthenticated);
        assert_eq!(status.message(), "token has expired");

        let status = account_rejection(AccountError::DatabaseError("down".into())).unwrap_err();
        assert_eq!(status.code(), Code::Internal);
    }

    #[test]
    fn test_product_outcomes() {
        let base = product_rejection(ProductError::AdminRequired("create")).unwrap();
        assert_eq!(base.status_code, 400);
        assert_eq!(base.message, "only admin can create product");

        let base = product_rejection(ProductError::ReplacementImageNotFound("x.png".into())).unwrap();
        assert_eq!(base.status_code, 404);
        assert_eq!(base.message, "Image not found");

        let status = product_rejection(ProductError::ImageStore("io".into())).unwrap_err();
        assert_eq!(status.code(), Code::Internal);
    }
}
