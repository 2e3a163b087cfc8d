//! Base URL resolution.
//!
//! Precedence, first match wins:
//!
//! 1. An explicitly configured URL, trailing slashes removed.
//! 2. The page the client runs on, when one is known. A page served by the
//!    local frontend dev server on `localhost:5173` talks to the API on
//!    `http://localhost:8080`; any other page uses its own protocol and
//!    hostname without the port.
//! 3. [`DEFAULT_BASE_URL`].

use std::env;
use std::fmt;

use reqwest::Url;
use tracing::debug;

/// Used when neither a configured URL nor a page location is available.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Environment variable holding the configured base URL.
pub const BASE_URL_ENV: &str = "PORTFOLIO_API_BASE_URL";

const DEV_SERVER_HOSTNAME: &str = "localhost";
const DEV_SERVER_PORT: u16 = 5173;

/// The location of the page hosting the client, as a browser reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserLocation {
    /// Scheme including the trailing colon, e.g. `https:`.
    pub protocol: String,
    pub hostname: String,
    pub port: Option<u16>,
}

impl BrowserLocation {
    pub fn new(protocol: impl Into<String>, hostname: impl Into<String>, port: Option<u16>) -> Self {
        let mut protocol = protocol.into();
        if !protocol.ends_with(':') {
            protocol.push(':');
        }

        Self {
            protocol,
            hostname: hostname.into(),
            port,
        }
    }

    /// Parses an absolute page URL such as `https://example.com:8443/projects`.
    ///
    /// A port equal to the scheme's default, or left empty, is reported as `None`.
    pub fn parse(href: &str) -> Option<Self> {
        let url = Url::parse(href.trim()).ok()?;
        let hostname = url.host_str().filter(|host| !host.is_empty())?;

        Some(Self::new(format!("{}:", url.scheme()), hostname, url.port()))
    }

    fn is_dev_server(&self) -> bool {
        self.hostname.eq_ignore_ascii_case(DEV_SERVER_HOSTNAME) && self.port == Some(DEV_SERVER_PORT)
    }

    /// `{protocol}//{hostname}`; the page's port is not carried over.
    fn origin_without_port(&self) -> String {
        format!("{}//{}", self.protocol, self.hostname)
    }
}

/// Which rule produced a [`ResolvedBaseUrl`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseUrlSource {
    Configured,
    DevServer,
    SameOrigin,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBaseUrl {
    pub url: String,
    pub source: BaseUrlSource,
}

impl fmt::Display for ResolvedBaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// Applies the precedence rules. Same inputs always give the same result.
pub fn resolve_base_url(
    configured: Option<&str>,
    location: Option<&BrowserLocation>,
) -> ResolvedBaseUrl {
    let resolved = if let Some(url) = configured.map(normalize).filter(|url| !url.is_empty()) {
        ResolvedBaseUrl {
            url: url.to_string(),
            source: BaseUrlSource::Configured,
        }
    } else if let Some(location) = location {
        if location.is_dev_server() {
            ResolvedBaseUrl {
                url: DEFAULT_BASE_URL.to_string(),
                source: BaseUrlSource::DevServer,
            }
        } else {
            ResolvedBaseUrl {
                url: location.origin_without_port(),
                source: BaseUrlSource::SameOrigin,
            }
        }
    } else {
        ResolvedBaseUrl {
            url: DEFAULT_BASE_URL.to_string(),
            source: BaseUrlSource::Fallback,
        }
    };

    debug!(url = %resolved.url, source = ?resolved.source, "Resolved portfolio API base URL");
    resolved
}

fn normalize(url: &str) -> &str {
    url.trim().trim_end_matches('/')
}

/// Inputs to base URL resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: Option<String>,
    pub location: Option<BrowserLocation>,
}

impl ClientConfig {
    /// Reads [`BASE_URL_ENV`], loading `.env` first when present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            base_url: env::var(BASE_URL_ENV).ok(),
            location: None,
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: BrowserLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn resolve(&self) -> ResolvedBaseUrl {
        resolve_base_url(self.base_url.as_deref(), self.location.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_url_wins_and_loses_trailing_slashes() {
        let page = BrowserLocation::new("https:", "portfolio.example.com", None);
        let resolved = resolve_base_url(Some("https://api.example.com///"), Some(&page));

        assert_eq!(resolved.url, "https://api.example.com");
        assert_eq!(resolved.source, BaseUrlSource::Configured);
    }

    #[test]
    fn configured_url_that_normalizes_to_empty_is_ignored() {
        for configured in ["", "/", "  ", "///"] {
            let resolved = resolve_base_url(Some(configured), None);
            assert_eq!(resolved.source, BaseUrlSource::Fallback, "{configured:?}");
            assert_eq!(resolved.url, DEFAULT_BASE_URL);
        }
    }

    #[test]
    fn dev_server_page_targets_local_api() {
        let page = BrowserLocation::new("http:", "localhost", Some(5173));
        let resolved = resolve_base_url(None, Some(&page));

        assert_eq!(resolved.url, "http://localhost:8080");
        assert_eq!(resolved.source, BaseUrlSource::DevServer);
    }

    #[test]
    fn other_pages_use_same_origin_without_port() {
        let page = BrowserLocation::new("https:", "portfolio.example.com", Some(8443));
        let resolved = resolve_base_url(None, Some(&page));

        assert_eq!(resolved.url, "https://portfolio.example.com");
        assert_eq!(resolved.source, BaseUrlSource::SameOrigin);
    }

    #[test]
    fn localhost_on_another_port_is_same_origin() {
        let page = BrowserLocation::new("http:", "localhost", Some(3000));
        let resolved = resolve_base_url(None, Some(&page));

        assert_eq!(resolved.url, "http://localhost");
        assert_eq!(resolved.source, BaseUrlSource::SameOrigin);
    }

    #[test]
    fn falls_back_without_any_input() {
        let resolved = resolve_base_url(None, None);

        assert_eq!(resolved.url, DEFAULT_BASE_URL);
        assert_eq!(resolved.source, BaseUrlSource::Fallback);
    }

    #[test]
    fn resolution_is_deterministic() {
        let page = BrowserLocation::new("https:", "portfolio.example.com", None);
        assert_eq!(
            resolve_base_url(None, Some(&page)),
            resolve_base_url(None, Some(&page))
        );
    }

    #[test]
    fn parses_page_urls() {
        assert_eq!(
            BrowserLocation::parse("http://localhost:5173/projects?tab=1"),
            Some(BrowserLocation::new("http:", "localhost", Some(5173)))
        );
        assert_eq!(
            BrowserLocation::parse("HTTPS://portfolio.example.com"),
            Some(BrowserLocation::new("https:", "portfolio.example.com", None))
        );
        assert_eq!(
            BrowserLocation::parse("http://[::1]:8080/"),
            Some(BrowserLocation::new("http:", "[::1]", Some(8080)))
        );
        assert_eq!(
            BrowserLocation::parse("https://portfolio.example.com:443/"),
            Some(BrowserLocation::new("https:", "portfolio.example.com", None))
        );
        assert_eq!(BrowserLocation::parse("not a url"), None);
        assert_eq!(BrowserLocation::parse("http://host:notaport/"), None);
    }

    #[test]
    fn protocol_gets_trailing_colon() {
        assert_eq!(BrowserLocation::new("https", "a.example", None).protocol, "https:");
    }

    #[test]
    fn config_builder_resolves() {
        let config = ClientConfig::default()
            .with_location(BrowserLocation::new("https:", "portfolio.example.com", None))
            .with_base_url("http://127.0.0.1:9000/");

        assert_eq!(config.resolve().url, "http://127.0.0.1:9000");
    }

    #[test]
    fn empty_port_means_scheme_default() {
        let page = BrowserLocation::parse("https://portfolio.example.com:/projects").unwrap();
        assert_eq!(page, BrowserLocation::new("https:", "portfolio.example.com", None));

        let resolved = resolve_base_url(None, Some(&page));
        assert_eq!(resolved.url, "https://portfolio.example.com");
        assert_eq!(resolved.source, BaseUrlSource::SameOrigin);
    }
}
