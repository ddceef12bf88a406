//! Error handling for campus-http
//!
//! This module maps registry failures to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::cmp::PartialEq;

use crate::registry::{SignupError, UnregisterError};

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Rejected signup request
    Signup(SignupError),

    /// Rejected unregister request
    Unregister(UnregisterError),
}

impl From<SignupError> for AppError {
    fn from(err: SignupError) -> Self {
        Self::Signup(err)
    }
}

impl From<UnregisterError> for AppError {
    fn from(err: UnregisterError) -> Self {
        Self::Unregister(err)
    }
}

impl PartialEq<StatusCode> for AppError {
    fn eq(&self, status_code: &StatusCode) -> bool {
        let (error_status, _) = self.status_and_message();
        &error_status == status_code
    }
}

impl AppError {
    /// Get the status code and error message for this error
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            // Every signup failure is a client-request error, including an
            // unknown activity name; unregister failures are not-found errors.
            Self::Signup(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Self::Unregister(err) => (StatusCode::NOT_FOUND, err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = self.status_and_message();

        let body = Json(json!({
            "detail": detail,
        }));

        (status, body).into_response()
    }
}
