use std::path::{Path, PathBuf};

use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};

/// Serves the bundled single-page app from `dir`.
///
/// Existing files are served as-is. Any other path falls back to
/// `index.html` so client-side routes such as `/projects` survive a reload.
/// Must be registered after every API service because it is mounted at `/`.
pub fn spa_service(dir: &Path) -> Files {
    let index = dir.join("index.html");

    Files::new("/", dir)
        .index_file("index.html")
        .default_handler(fn_service(move |req: ServiceRequest| {
            let index = index.clone();
            async move { serve_index(req, index).await }
        }))
}

async fn serve_index(
    req: ServiceRequest,
    index: PathBuf,
) -> Result<ServiceResponse, actix_web::Error> {
    let (http_req, _payload) = req.into_parts();
    let response = NamedFile::open_async(&index)
        .await?
        .into_response(&http_req);

    Ok(ServiceResponse::new(http_req, response))
}
