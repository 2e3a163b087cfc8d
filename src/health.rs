use actix_web::{get, HttpResponse, Responder};

use crate::api::schemas::StatusResponse;

/// LIVENESS PROBE
/// - No I/O
/// - Always 200 while the process is serving
#[utoipa::path(
    get,
    path = "/api/status",
    tag = "status",
    responses(
        (status = 200, description = "API is running", body = StatusResponse)
    )
)]
#[get("/api/status")]
pub async fn status() -> impl Responder {
    HttpResponse::Ok().json(StatusResponse::running())
}

/// Same payload on `/`, mounted only when no frontend owns the root.
#[get("/")]
pub async fn root_status() -> impl Responder {
    HttpResponse::Ok().json(StatusResponse::running())
}
