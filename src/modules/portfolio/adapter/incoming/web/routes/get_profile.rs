use actix_web::{get, web, HttpResponse, Responder};

use crate::modules::portfolio::application::domain::entities::Profile;
use crate::AppState;

/// Get profile
///
/// Returns profile metadata.
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "portfolio",
    responses(
        (status = 200, description = "Profile metadata", body = Profile)
    )
)]
#[get("/api/profile")]
pub async fn get_profile_handler(data: web::Data<AppState>) -> impl Responder {
    let profile = data.portfolio.get_profile.execute().await;

    HttpResponse::Ok().json(profile)
}
