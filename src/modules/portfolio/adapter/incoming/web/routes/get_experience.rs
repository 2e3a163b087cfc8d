use actix_web::{get, web, HttpResponse, Responder};

use crate::modules::portfolio::application::domain::entities::Experience;
use crate::AppState;

/// Work experience timeline
#[utoipa::path(
    get,
    path = "/api/experience",
    tag = "portfolio",
    responses(
        (status = 200, description = "Work experience timeline", body = [Experience])
    )
)]
#[get("/api/experience")]
pub async fn get_experience_handler(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(data.portfolio.get_experience.execute().await)
}
