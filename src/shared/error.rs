use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::shared::structs::discord::interaction::ErrorResponse;
use crate::shared::{INTERNAL_SERVER_ERROR_MESSAGE, UNKNOWN_INTERACTION_TYPE_MESSAGE};

/// Every way dispatching an interaction can fail.
///
/// Only [`DispatchError::UnknownInteractionType`] is reported to the caller as a client error.
/// The remaining variants collapse into a generic 500 so that no detail leaks into the body.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("unknown interaction type: {0}")]
    UnknownInteractionType(serde_json::Value),
    #[error("malformed request: {0}")]
    MalformedRequest(String),
    #[error("failed to deserialize incoming payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

impl DispatchError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DispatchError::UnknownInteractionType(_) => StatusCode::BAD_REQUEST,
            DispatchError::MalformedRequest(_) | DispatchError::InvalidPayload(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn public_message(&self) -> &'static str {
        match self {
            DispatchError::UnknownInteractionType(_) => UNKNOWN_INTERACTION_TYPE_MESSAGE,
            _ => INTERNAL_SERVER_ERROR_MESSAGE,
        }
    }

    pub fn error_response(&self) -> Response {
        let body = ErrorResponse {
            error: self.public_message().to_string(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

impl IntoResponse for DispatchError {
    fn into_response(self) -> Response {
        self.error_response()
    }
}
