pub mod api;
pub mod config;
pub mod frontend;
pub mod health;
pub mod modules;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::config::AppConfig;
use crate::modules::portfolio::adapter::incoming::web::routes::{
    get_experience_handler, get_profile_handler, get_projects_handler, get_skills_handler,
};
use crate::modules::portfolio::adapter::outgoing::SeededPortfolio;
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;

use actix_cors::Cors;
use actix_web::middleware::{from_fn, Condition, Logger};
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::path::PathBuf;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub portfolio: PortfolioUseCases,
}

/// Which optional surfaces `init_routes` mounts.
#[derive(Debug, Clone, Default)]
pub struct RouteOptions {
    pub openapi_docs: bool,
    pub frontend_dir: Option<PathBuf>,
}

impl RouteOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            openapi_docs: config.openapi_enabled(),
            frontend_dir: config.frontend_dir().map(PathBuf::from),
        }
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    // Environment variable loading, before tracing so RUST_LOG from .env applies
    config::load_dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().context("Invalid configuration")?;
    info!(environment = %config.environment, "Configuration loaded");

    // Seed once up front so the first request does not pay for it
    let portfolio = SeededPortfolio::shared();
    portfolio
        .seed()
        .validate()
        .context("Seed data violates portfolio invariants")?;

    let state = AppState {
        portfolio: PortfolioUseCases::from_query(portfolio),
    };

    let routes = RouteOptions::from_config(&config);
    match (&config.static_dir, &routes.frontend_dir) {
        (Some(dir), None) => warn!(
            "STATIC_DIR {} does not exist, serving the API only",
            dir.display()
        ),
        (_, Some(dir)) => info!("Serving frontend from {}", dir.display()),
        (None, None) => {}
    }
    if routes.openapi_docs {
        info!("OpenAPI docs available at /swagger-ui/");
    }

    let https_redirect = config.https_redirect;
    let https_target = shared::middleware::HttpsRedirect {
        port: config.https_port,
    };
    if https_redirect {
        info!(port = ?https_target.port, "HTTPS redirection enabled");
    }

    let server_url = config.bind_address();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(https_target))
            .wrap(Condition::new(
                https_redirect,
                from_fn(shared::middleware::redirect_to_https),
            ))
            .wrap(cors())
            .wrap(Logger::default())
            .configure(|cfg| init_routes(cfg, &routes))
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await?;

    Ok(())
}

/// Any origin, method and header; never credentials.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

pub fn init_routes(cfg: &mut web::ServiceConfig, options: &RouteOptions) {
    // Status
    cfg.service(crate::health::status);
    // Portfolio
    cfg.service(get_profile_handler);
    cfg.service(get_projects_handler);
    cfg.service(get_experience_handler);
    cfg.service(get_skills_handler);
    // OpenAPI (development only)
    if options.openapi_docs {
        cfg.service(
            SwaggerUi::new("/swagger-ui/{_:.*}").url("/api/openapi.json", ApiDoc::openapi()),
        );
    }
    // Unmatched /api/* never reaches the frontend
    cfg.service(web::scope("/api").default_service(web::to(shared::api::not_found)));

    match &options.frontend_dir {
        Some(dir) => {
            cfg.service(crate::frontend::spa_service(dir));
        }
        None => {
            cfg.service(crate::health::root_status);
            cfg.default_service(web::to(shared::api::not_found));
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
