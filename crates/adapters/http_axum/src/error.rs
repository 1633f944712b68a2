//! HTTP error mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use procgate_domain::error::DispatchError;

/// JSON body returned for every error response.
#[derive(serde::Serialize)]
struct ErrorBody {
    error: String,
}

/// Error type returned by the API handlers.
///
/// Dispatch failures keep their original error so the status mapping can
/// distinguish a client mistake from a store fault.
#[derive(Debug)]
pub enum ApiError {
    /// The request carried no acceptable bearer token.
    Unauthorized,
    /// Unknown resource slug, or a read that matched nothing.
    NotFound,
    /// The request was understood but refused, with a reason.
    Rejected(String),
    /// The method is real but does not apply to this path shape.
    MethodNotAllowed,
    /// The dispatch round trip itself failed.
    Dispatch(DispatchError),
}

impl From<DispatchError> for ApiError {
    fn from(err: DispatchError) -> Self {
        Self::Dispatch(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "missing or invalid bearer token".to_owned(),
            ),
            Self::NotFound => (StatusCode::NOT_FOUND, "not found".to_owned()),
            Self::Rejected(message) => (StatusCode::BAD_REQUEST, message),
            Self::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "method not allowed for this path".to_owned(),
            ),
            Self::Dispatch(DispatchError::UnsupportedVerb(verb)) => (
                StatusCode::METHOD_NOT_ALLOWED,
                format!("unsupported verb: {verb}"),
            ),
            Self::Dispatch(err) => {
                tracing::error!(error = %err, "dispatch failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_owned(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
