//! Response envelopes.
//!
//! Every response this service emits is one of two JSON bodies: a success
//! envelope echoing the parsed report, or a failure envelope with a fixed
//! error string. The status code is carried alongside so handlers can
//! return an envelope directly.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

/// Success envelope: the report body parsed as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct ReportReceived {
    pub message: String,
    pub data: Value,
}

impl ReportReceived {
    pub fn new(data: Value) -> Self {
        Self {
            message: "JSON received successfully".to_string(),
            data,
        }
    }
}

impl IntoResponse for ReportReceived {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Failure envelope, paired with a 400 or 404 status.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    pub error: String,
    #[serde(skip)]
    status: StatusCode,
}

impl ApiError {
    /// The request body was not well-formed JSON.
    pub fn invalid_json() -> Self {
        Self {
            error: "Invalid JSON format".to_string(),
            status: StatusCode::BAD_REQUEST,
        }
    }

    /// The method+path pair matched no known route.
    pub fn endpoint_not_found() -> Self {
        Self {
            error: "Endpoint not found".to_string(),
            status: StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}
