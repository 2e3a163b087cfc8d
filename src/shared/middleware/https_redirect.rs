use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    http::header,
    middleware::Next,
    web, Error, HttpResponse,
};
use tracing::debug;

/// Where plain-HTTP requests are sent. Registered as app data next to the middleware.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HttpsRedirect {
    /// `None` redirects to the implicit port 443
    pub port: Option<u16>,
}

/// Redirects plain-HTTP requests to the same host and path over HTTPS.
///
/// The scheme comes from the connection info, so `Forwarded` and
/// `X-Forwarded-Proto` set by a TLS-terminating proxy are honoured. The target
/// port comes from [`HttpsRedirect`] app data when present.
pub async fn redirect_to_https<B>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error>
where
    B: MessageBody + 'static,
{
    let (is_https, host) = {
        let info = req.connection_info();
        (
            info.scheme().eq_ignore_ascii_case("https"),
            info.host().to_string(),
        )
    };

    if is_https {
        return next
            .call(req)
            .await
            .map(ServiceResponse::map_into_left_body);
    }

    let path = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    let port = req
        .app_data::<web::Data<HttpsRedirect>>()
        .and_then(|target| target.port)
        .map(|port| format!(":{port}"))
        .unwrap_or_default();
    let location = format!("https://{}{}{}", strip_port(&host), port, path);
    debug!(%location, "Redirecting to HTTPS");

    let response = HttpResponse::TemporaryRedirect()
        .insert_header((header::LOCATION, location))
        .finish();

    Ok(req.into_response(response).map_into_right_body())
}

fn strip_port(host: &str) -> &str {
    if host.starts_with('[') {
        // IPv6 literal, e.g. [::1]:8080
        return match host.find(']') {
            Some(end) => &host[..=end],
            None => host,
        };
    }

    match host.rsplit_once(':') {
        Some((name, port)) if port.chars().all(|c| c.is_ascii_digit()) => name,
        _ => host,
    }
}
