//! Typed async client for the portfolio API.
//!
//! Wraps the read-only endpoints (`/api/profile`, `/api/projects`,
//! `/api/experience`, `/api/skills`, `/api/status`), resolves which server to
//! talk to, and knows which data each page of the site needs.
//!
//! # Example
//!
//! ```no_run
//! use portfolio_client::{Client, ViewData, ViewRoute};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // PORTFOLIO_API_BASE_URL, or http://localhost:8080
//! let client = Client::from_env()?;
//!
//! let route = ViewRoute::from_path("/projects").ok_or("no such page")?;
//! if let ViewData::Projects(projects) = client.load_view(route).await? {
//!     for project in projects {
//!         println!("{}: {}", project.id, project.name);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All operations return `Result<T, ClientError>`:
//!
//! ```no_run
//! # use portfolio_client::{Client, ClientError};
//! # async fn example(client: Client) {
//! match client.get_profile().await {
//!     Ok(profile) => println!("{}", profile.full_name),
//!     Err(ClientError::Api { status, message }) => eprintln!("{status}: {message}"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! # }
//! ```

pub mod base_url;
pub mod client;
pub mod error;
pub mod routes;
pub mod types;

pub use base_url::{
    resolve_base_url, BaseUrlSource, BrowserLocation, ClientConfig, ResolvedBaseUrl,
    DEFAULT_BASE_URL,
};
pub use client::Client;
pub use error::{ClientError, Result};
pub use routes::{ViewData, ViewRoute};
pub use types::{
    Experience, InvalidProficiency, Proficiency, Profile, Project, Skill, StatusResponse,
};
