use crate::api::schemas::{ErrorDetail, ErrorResponse, StatusResponse};
use crate::modules::portfolio::application::domain::entities::{
    Experience, Proficiency, Profile, Project, Skill,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Read-only profile, projects, experience and skills for the portfolio site",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Status
        crate::health::status,

        // Portfolio endpoints
        crate::modules::portfolio::adapter::incoming::web::routes::get_profile_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::get_projects_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::get_experience_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::get_skills_handler,
    ),
    components(
        schemas(
            StatusResponse,
            ErrorResponse,
            ErrorDetail,
            Profile,
            Project,
            Experience,
            Skill,
            Proficiency
        )
    ),
    tags(
        (name = "status", description = "Liveness endpoints"),
        (name = "portfolio", description = "Portfolio content endpoints"),
    )
)]
pub struct ApiDoc;
