use actix_web::{get, web, HttpResponse, Responder};
use tracing::debug;

use crate::modules::portfolio::application::domain::entities::Project;
use crate::AppState;

/// List projects
///
/// Returns the list of projects in display order.
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "portfolio",
    responses(
        (status = 200, description = "List of projects", body = [Project])
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    let projects = data.portfolio.get_projects.execute().await;
    debug!(count = projects.len(), "Serving projects");

    HttpResponse::Ok().json(projects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::portfolio_test_fixtures::sample_project;
    use crate::tests::support::stubs::StubGetProjectsUseCase;

    #[actix_web::test]
    async fn get_projects_returns_array_in_order() {
        let mut with_repo = sample_project(2);
        with_repo.repo_url = Some("https://github.com/example/two".to_string());

        let state = TestAppStateBuilder::default()
            .with_get_projects(StubGetProjectsUseCase::returning(vec![
                sample_project(1),
                with_repo,
            ]))
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(get_projects_handler)).await;

        let req = test::TestRequest::get().uri("/api/projects").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        let items = body.as_array().expect("projects must be a JSON array");

        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["id"], 1);
        assert_eq!(items[1]["id"], 2);
        assert!(items[0]["repoUrl"].is_null());
        assert_eq!(items[1]["repoUrl"], "https://github.com/example/two");
        assert!(items[0]["technologies"].is_array());
        assert!(items[0]["highlights"].is_array());
    }

    #[actix_web::test]
    async fn get_projects_with_no_projects_returns_empty_array() {
        let state = TestAppStateBuilder::default()
            .with_get_projects(StubGetProjectsUseCase::returning(vec![]))
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(get_projects_handler)).await;

        let req = test::TestRequest::get().uri("/api/projects").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, serde_json::json!([]));
    }
}
