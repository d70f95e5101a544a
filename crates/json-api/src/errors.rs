//! HTTP error responses.
//!
//! The API contract fixes the body of every failure response to
//! `{"error": "<message>"}`, so errors render themselves instead of
//! going through salvo's default `StatusError` body.

use salvo::{
    Response,
    http::StatusCode,
    oapi::{self, Components, EndpointOutRegister, Operation, ToSchema},
    prelude::Json,
    writing::Scribe,
};
use serde::{Deserialize, Serialize};

/// Wire shape of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorBody {
    /// Human-readable message.
    pub error: String,
}

/// An error response with a fixed status code and message.
#[derive(Debug)]
pub(crate) struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// 404 with `"<resource> not found"`.
    pub(crate) fn not_found(resource: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: format!("{resource} not found"),
        }
    }

    /// 400 for create drafts failing required-field validation.
    pub(crate) fn missing_required_fields() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: "Missing required fields".to_string(),
        }
    }

    /// 500 for state-extraction and other infrastructure failures.
    pub(crate) fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Internal server error".to_string(),
        }
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status);
        res.render(Json(ErrorBody {
            error: self.message,
        }));
    }
}

impl EndpointOutRegister for ApiError {
    fn register(components: &mut Components, operation: &mut Operation) {
        operation.responses.insert(
            "4XX",
            oapi::Response::new("Request error")
                .add_content("application/json", ErrorBody::to_schema(components)),
        );
    }
}
