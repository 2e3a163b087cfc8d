use actix_web::{get, web, HttpResponse, Responder};

use crate::modules::portfolio::application::domain::entities::Skill;
use crate::AppState;

/// List skills
///
/// Returns the list of skills with proficiency on a 1-5 scale.
#[utoipa::path(
    get,
    path = "/api/skills",
    tag = "portfolio",
    responses(
        (status = 200, description = "List of skills with proficiency", body = [Skill])
    )
)]
#[get("/api/skills")]
pub async fn get_skills_handler(data: web::Data<AppState>) -> impl Responder {
    let skills = data.portfolio.get_skills.execute().await;

    HttpResponse::Ok().json(skills)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::portfolio_test_fixtures::sample_skill;
    use crate::tests::support::stubs::StubGetSkillsUseCase;

    #[actix_web::test]
    async fn get_skills_returns_proficiency_as_integer() {
        let state = TestAppStateBuilder::default()
            .with_get_skills(StubGetSkillsUseCase::returning(vec![
                sample_skill("Rust", "Language", 5),
                sample_skill("Kubernetes", "Cloud", 2),
            ]))
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(get_skills_handler)).await;

        let req = test::TestRequest::get().uri("/api/skills").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!([
                { "name": "Rust", "category": "Language", "proficiency": 5 },
                { "name": "Kubernetes", "category": "Cloud", "proficiency": 2 }
            ])
        );
    }
}
