//! API response bodies and the HTTP error type
//!
//! Success bodies are returned bare (arrays / objects); every failure has a
//! top-level `detail` field:
//! - 404: `{"detail": "Order not found"}`
//! - 422: `{"detail": [{"field": "userAddress.city", "message": "must not be empty"}]}`
//! - 500: `{"detail": "Internal Server Error"}`

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::{ValidationErrors, ValidationErrorsKind};

use crate::gateway::services::ServiceError;

// ============================================================================
// Success bodies
// ============================================================================

/// Plain confirmation
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Product updated successfully")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result of `POST /orders`
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreatedResponse {
    #[schema(example = "01J9ZQ3V4X8K2M5N7P0R6S1T3W")]
    pub order_id: String,
    #[schema(example = "Order created successfully")]
    pub message: String,
}

// ============================================================================
// Error bodies
// ============================================================================

/// Body of 404 and 500 responses
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Order not found")]
    pub detail: String,
}

/// One rejected input field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldIssue {
    /// Dotted path in wire naming, e.g. `items[0].boughtQuantity`
    #[schema(example = "userAddress.city")]
    pub field: String,
    #[schema(example = "must not be empty")]
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Body of 422 responses
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub detail: Vec<FieldIssue>,
}

// ============================================================================
// ApiError
// ============================================================================

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(&'static str),

    #[error("Invalid request: {0:?}")]
    Validation(Vec<FieldIssue>),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ApiResult<T> = Result<Json<T>, ApiError>;

impl ApiError {
    /// Single-field validation failure
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation(vec![FieldIssue::new(field, message)])
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(msg) => Self::NotFound(msg),
            ServiceError::Store(e) => Self::Internal(format!("{:#}", e)),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errs: ValidationErrors) -> Self {
        Self::Validation(flatten_validation_errors(&errs))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::NotFound(msg) => (
                status,
                Json(ErrorResponse {
                    detail: msg.to_string(),
                }),
            )
                .into_response(),
            Self::Validation(issues) => {
                tracing::debug!(?issues, "Rejected request");
                (status, Json(ValidationErrorResponse { detail: issues })).into_response()
            }
            Self::Internal(cause) => {
                // Cause stays in the log, never in the body
                tracing::error!(error = %cause, "Request failed");
                (
                    status,
                    Json(ErrorResponse {
                        detail: "Internal Server Error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

// ============================================================================
// Validation error flattening
// ============================================================================

/// Flatten nested `validator` errors into dotted, camelCase field paths.
pub fn flatten_validation_errors(errs: &ValidationErrors) -> Vec<FieldIssue> {
    let mut out = Vec::new();
    collect_issues("", errs, &mut out);
    out.sort_by(|a, b| a.field.cmp(&b.field));
    out
}

fn collect_issues(prefix: &str, errs: &ValidationErrors, out: &mut Vec<FieldIssue>) {
    for (field, kind) in errs.errors() {
        let path = if prefix.is_empty() {
            to_camel_case(field)
        } else {
            format!("{}.{}", prefix, to_camel_case(field))
        };
        match kind {
            ValidationErrorsKind::Field(list) => {
                for e in list {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    out.push(FieldIssue::new(path.clone(), message));
                }
            }
            ValidationErrorsKind::Struct(inner) => collect_issues(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (idx, inner) in items {
                    collect_issues(&format!("{}[{}]", path, idx), inner, out);
                }
            }
        }
    }
}

/// `zip_code` -> `zipCode`
fn to_camel_case(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    let mut upper = false;
    for c in snake.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
