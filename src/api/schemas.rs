// src/api/schemas.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const STATUS_MESSAGE: &str = "Portfolio API running";

/// Liveness payload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    #[schema(example = "Portfolio API running")]
    pub message: String,
}

impl StatusResponse {
    pub fn running() -> Self {
        Self {
            message: STATUS_MESSAGE.to_string(),
        }
    }
}

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    /// Error details
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    #[schema(example = "NOT_FOUND")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Resource not found")]
    pub message: String,
}
