use std::fmt;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    pub error: ApiErrorInfo,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApiErrorInfo {
    pub code: String,
    pub message: String,
    /// Parser output for bodies that could not be read as JSON.
    pub details: Option<String>,
    /// Per-field problems, present when the request body failed validation.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<ApiFieldError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ApiFieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug)]
pub enum AppError {
    BadRequest(ApiErrorInfo),
    NotFound(ApiErrorInfo),
    InternalServerError(ApiErrorInfo),
}

fn info(code: &str, message: &str) -> ApiErrorInfo {
    ApiErrorInfo {
        code: code.to_string(),
        message: message.to_string(),
        details: None,
        fields: Vec::new(),
    }
}

impl AppError {
    pub fn bad_request(code: &str, message: &str) -> Self {
        Self::BadRequest(info(code, message))
    }

    pub fn bad_request_with_details(
        code: &str, message: &str, details: &str,
    ) -> Self {
        Self::BadRequest(ApiErrorInfo {
            details: Some(details.to_string()),
            ..info(code, message)
        })
    }

    pub fn validation_failed(
        code: &str, message: &str, fields: Vec<ApiFieldError>,
    ) -> Self {
        Self::BadRequest(ApiErrorInfo {
            fields,
            ..info(code, message)
        })
    }

    pub fn not_found(code: &str, message: &str) -> Self {
        Self::NotFound(info(code, message))
    }

    pub fn internal_server_error(message: &str) -> Self {
        Self::InternalServerError(info("INTERNAL_ERROR", message))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn info(&self) -> &ApiErrorInfo {
        match self {
            Self::BadRequest(info)
            | Self::NotFound(info)
            | Self::InternalServerError(info) => info,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.info().message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error = match self {
            Self::BadRequest(info)
            | Self::NotFound(info)
            | Self::InternalServerError(info) => info,
        };
        (status, Json(ApiErrorResponse { error })).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request_with_details(
            "MALFORMED_REQUEST",
            "Request body could not be parsed",
            &rejection.body_text(),
        )
    }
}
