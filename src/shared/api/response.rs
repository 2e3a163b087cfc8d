// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

/// Error envelope returned for requests the API cannot route.
#[derive(Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub error: ApiError,
}

#[derive(Serialize, Clone)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiResponse {
    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse {
            success: false,
            error: ApiError {
                code: code.to_string(),
                message: message.to_string(),
            },
        })
    }

    pub fn not_found(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, code, message)
    }
}

/// Fallback for any path no route matched.
pub async fn not_found() -> HttpResponse {
    ApiResponse::not_found("NOT_FOUND", "Resource not found")
}
