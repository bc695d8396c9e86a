use crate::proto::common::BaseResponse;

pub fn success(message: impl Into<String>) -> BaseResponse {
    BaseResponse {
        status_code: 200,
        message: message.into(),
        is_error: false,
    }
}

pub fn bad_request(message: impl Into<String>) -> BaseResponse {
    BaseResponse {
        status_code: 400,
        message: message.into(),
        is_error: true,
    }
}

pub fn not_found(message: impl Into<String>) -> BaseResponse {
    BaseResponse {
        status_code: 404,
        message: message.into(),
        is_error: true,
    }
}
