use tonic::metadata::MetadataMap;
use tonic::Status;

const AUTHORIZATION: &str = "authorization";
const BEARER: &str = "Bearer";

/// Extract the token from an `authorization: Bearer <token>` metadata entry.
///
/// The value must be exactly two space-separated parts with the literal,
/// case-sensitive `Bearer` scheme.
pub fn bearer_token(metadata: &MetadataMap) -> Result<&str, Status> {
    let value = metadata
        .get(AUTHORIZATION)
        .ok_or_else(|| Status::unauthenticated("no authorization token found in metadata"))?;

    if value.is_empty() {
        return Err(Status::unauthenticated("authorization token is empty"));
    }

    let value = value
        .to_str()
        .map_err(|_| Status::unauthenticated("invalid authorization token format"))?;

    let parts: Vec<&str> = value.split(' ').collect();
    let [scheme, token] = parts.as_slice() else {
        return Err(Status::unauthenticated("invalid authorization token format"));
    };

    if *scheme != BEARER {
        return Err(Status::unauthenticated(
            "authorization token must start with Bearer",
        ));
    }

    Ok(*token)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use tonic::Code;

    use super::*;

    fn metadata_with(value: &str) -> MetadataMap {
        let mut metadata = MetadataMap::new();
        metadata.insert(AUTHORIZATION, value.parse().unwrap());
        metadata
    }

    fn rejection(metadata: &MetadataMap) -> String {
        let status = bearer_token(metadata).unwrap_err();
        assert_eq!(status.code(), Code::Unauthenticated);
        status.message().to_string()
    }

    #[test]
    fn test_valid_bearer_token() {
        let metadata = metadata_with("Bearer abc.def.ghi");
        assert_eq!(bearer_token(&metadata).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_missing_entry() {
        assert_eq!(
            rejection(&MetadataMap::new()),
            "no authorization token found in metadata"
        );
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(
            rejection(&metadata_with("")),
            "authorization token is empty"
        );
    }

    #[test]
    fn test_wrong_part_count() {
        for value in ["Bearer", "Bearer  abc", "Bearer abc def", "abc"] {
            assert_eq!(
                rejection(&metadata_with(value)),
                "invalid authorization token format",
                "value: {:?}",
                value
            );
        }
    }

    #[test]
    fn test_wrong_scheme() {
        for value in ["Token abc", "bearer abc", "BEARER abc"] {
            assert_eq!(
                rejection(&metadata_with(value)),
                "authorization token must start with Bearer",
                "value: {:?}",
                value
            );
        }
    }

    proptest! {
        #[test]
        fn prop_any_spaceless_token_is_recovered(token in "[A-Za-z0-9._-]{1,64}") {
            let metadata = metadata_with(&format!("Bearer {}", token));
            prop_assert_eq!(bearer_token(&metadata).unwrap(), token.as_str());
        }

        #[test]
        fn prop_other_schemes_are_rejected(scheme in "[A-Za-z]{1,12}", token in "[a-z0-9]{1,16}") {
            prop_assume!(scheme != BEARER);
            let metadata = metadata_with(&format!("{} {}", scheme, token));
            let status = bearer_token(&metadata).unwrap_err();
            prop_assert_eq!(status.message(), "authorization token must start with Bearer");
        }
    }
}
