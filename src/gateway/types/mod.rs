//! Gateway types module
//!
//! ## Input Types
//! - [`CreateOrderRequest`]: order submission body
//! - [`Pagination`], [`QuantityQuery`]: query strings
//! - [`ValidatedJson`], [`ApiQuery`], [`ApiPath`]: extractors that reject with [`ApiError`]
//!
//! ## Output Types
//! - [`MessageResponse`], [`OrderCreatedResponse`]: success bodies
//! - [`ErrorResponse`], [`ValidationErrorResponse`]: failure bodies
//!
//! ## Submodules
//! - [`order`]: request types
//! - [`response`]: response types and `ApiError`
//! - [`extract`]: axum extractors

pub mod extract;
pub mod order;
pub mod response;

// Re-export commonly used types at module root
pub use extract::{ApiPath, ApiQuery, ValidatedJson};
pub use order::{CreateOrderRequest, DEFAULT_LIMIT, Pagination, QuantityQuery};
pub use response::{
    ApiError, ApiResult, ErrorResponse, FieldIssue, MessageResponse, OrderCreatedResponse,
    ValidationErrorResponse, flatten_validation_errors,
};
