use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_HTTPS_PORT: u16 = 443;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    Test,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
            Environment::Test => "test",
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            "test" => Ok(Environment::Test),
            other => Err(ConfigError::UnknownEnvironment(other.to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown RUST_ENV '{0}' (expected development, production or test)")]
    UnknownEnvironment(String),

    #[error("Invalid PORT value '{0}'")]
    InvalidPort(String),

    #[error("Invalid HTTPS_PORT value '{0}'")]
    InvalidHttpsPort(String),

    #[error("Invalid {key} value '{value}' (expected true or false)")]
    InvalidFlag { key: &'static str, value: String },
}

/// Server settings resolved from the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub environment: Environment,
    pub host: String,
    pub port: u16,
    /// Directory holding the built SPA, if one is bundled with the API
    pub static_dir: Option<PathBuf>,
    pub https_redirect: bool,
    /// Port HTTPS redirects point at; `None` means the implicit 443
    pub https_port: Option<u16>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let environment = match get("RUST_ENV") {
            Some(value) => value.parse()?,
            None => Environment::Development,
        };

        let host = get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match get("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value))?,
            None => DEFAULT_PORT,
        };

        let static_dir = get("STATIC_DIR").map(PathBuf::from);

        let https_redirect = match get("HTTPS_REDIRECT") {
            Some(value) => parse_flag("HTTPS_REDIRECT", &value)?,
            None => get("APP_URLS")
                .map(|urls| serves_https(&urls))
                .unwrap_or(false),
        };

        let https_port = match get("HTTPS_PORT") {
            Some(value) => match value.trim().parse::<u16>() {
                Ok(DEFAULT_HTTPS_PORT) => None,
                Ok(port) => Some(port),
                Err(_) => return Err(ConfigError::InvalidHttpsPort(value)),
            },
            None => get("APP_URLS").and_then(|urls| https_port_from_urls(&urls)),
        };

        Ok(Self {
            environment,
            host,
            port,
            static_dir,
            https_redirect,
            https_port,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn openapi_enabled(&self) -> bool {
        self.environment == Environment::Development
    }

    /// The static asset directory, only when it actually exists.
    pub fn frontend_dir(&self) -> Option<&Path> {
        self.static_dir.as_deref().filter(|dir| dir.is_dir())
    }
}

/// Loads `.env.{RUST_ENV}` when present, falling back to `.env`.
pub fn load_dotenv() {
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: value.to_string(),
        }),
    }
}

fn serves_https(urls: &str) -> bool {
    urls.split([';', ','])
        .any(|url| url.trim().to_ascii_lowercase().starts_with("https://"))
}

/// Port of the first `https://` entry, e.g. `8443` from `https://+:8443`.
fn https_port_from_urls(urls: &str) -> Option<u16> {
    urls.split([';', ','])
        .map(str::trim)
        .filter(|url| url.to_ascii_lowercase().starts_with("https://"))
        .find_map(|url| {
            let authority = url["https://".len()..]
                .split(['/', '?', '#'])
                .next()
                .unwrap_or_default();
            let (_, port) = authority.rsplit_once(':')?;
            port.parse::<u16>().ok()
        })
        .filter(|port| *port != DEFAULT_HTTPS_PORT)
}
