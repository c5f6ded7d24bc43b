use std::env;

use axum::http::{header, HeaderName, HeaderValue};
use thiserror::Error;

/// Errors raised while reading configuration at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("unknown profile store backend: {0}")]
    UnknownStore(String),

    #[error("unknown profile id format: {0}")]
    UnknownIdFormat(String),

    #[error("invalid cache-control value: {0}")]
    InvalidCacheControl(String),
}

/// Runtime configuration, resolved once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub cache: CachePolicy,
    pub store: StoreConfig,
}

/// Which backend serves profile lookups
#[derive(Debug, Clone)]
pub enum StoreConfig {
    /// Seeded in-process map, no external services
    Memory,
    /// Postgres `users` table
    Postgres { url: String, id_format: IdFormat },
}

/// Shape of the `users.id` column in the postgres store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdFormat {
    Text,
    Uuid,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// `PORT` and `PROFILE_CACHE_POLICY` have defaults; `DATABASE_URL` is
    /// required only when `PROFILE_STORE=postgres`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(env::var("PORT").ok());

        let cache = match env::var("PROFILE_CACHE_POLICY") {
            Ok(value) => CachePolicy::from_value(&value)?,
            Err(_) => CachePolicy::default(),
        };

        let store = match env::var("PROFILE_STORE").as_deref() {
            Err(_) | Ok("memory") => StoreConfig::Memory,
            Ok("postgres") => {
                let url = env::var("DATABASE_URL")
                    .map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;
                let id_format = match env::var("PROFILE_ID_FORMAT").as_deref() {
                    Err(_) | Ok("text") => IdFormat::Text,
                    Ok("uuid") => IdFormat::Uuid,
                    Ok(other) => return Err(ConfigError::UnknownIdFormat(other.to_string())),
                };
                StoreConfig::Postgres { url, id_format }
            }
            Ok(other) => return Err(ConfigError::UnknownStore(other.to_string())),
        };

        Ok(Self { port, cache, store })
    }
}

/// Parse a PORT value; absent or unparseable input falls back to 3000.
fn parse_port(raw: Option<String>) -> u16 {
    raw.and_then(|value| value.parse().ok()).unwrap_or(3000)
}

/// Cache directives attached to successful responses.
///
/// Named presets cover the deployment profiles this service ships with;
/// any other configured value is used as a literal Cache-Control header.
/// The Vary companion is fixed: cached entries key on the Authorization
/// header because the response body is derived from it.
#[derive(Debug, Clone)]
pub struct CachePolicy {
    cache_control: HeaderValue,
}

impl CachePolicy {
    /// CDN-cached for 30s, client-cached for 60s.
    pub fn shared_short() -> Self {
        Self {
            cache_control: HeaderValue::from_static("s-maxage=30,max-age=60"),
        }
    }

    /// Client-cached for 60s, revalidation required once stale.
    pub fn revalidate() -> Self {
        Self {
            cache_control: HeaderValue::from_static("must-revalidate, max-age=60"),
        }
    }

    /// CDN-cached for a day, client-cached for 30 minutes.
    pub fn shared_long() -> Self {
        Self {
            cache_control: HeaderValue::from_static("s-maxage=86400,max-age=1800"),
        }
    }

    /// Resolve a configured value: a preset name, or a literal directive.
    pub fn from_value(value: &str) -> Result<Self, ConfigError> {
        match value {
            "shared-short" => Ok(Self::shared_short()),
            "revalidate" => Ok(Self::revalidate()),
            "shared-long" => Ok(Self::shared_long()),
            literal => HeaderValue::from_str(literal)
                .map(|cache_control| Self { cache_control })
                .map_err(|_| ConfigError::InvalidCacheControl(literal.to_string())),
        }
    }

    /// Header pair for cacheable responses.
    pub fn headers(&self) -> [(HeaderName, HeaderValue); 2] {
        [
            (header::CACHE_CONTROL, self.cache_control.clone()),
            (header::VARY, HeaderValue::from_static("authorization")),
        ]
    }

    /// The Cache-Control value as a string, for logs and assertions.
    pub fn cache_control(&self) -> &str {
        self.cache_control.to_str().unwrap_or_default()
    }
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self::shared_short()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_defaults_to_3000() {
        assert_eq!(parse_port(None), 3000);
        assert_eq!(parse_port(Some(String::new())), 3000);
        assert_eq!(parse_port(Some("not-a-number".to_string())), 3000);
    }

    #[test]
    fn port_parses_numeric_values() {
        assert_eq!(parse_port(Some("8080".to_string())), 8080);
    }

    #[test]
    fn cache_presets_render_exact_directives() {
        assert_eq!(
            CachePolicy::shared_short().cache_control(),
            "s-maxage=30,max-age=60"
        );
        assert_eq!(
            CachePolicy::revalidate().cache_control(),
            "must-revalidate, max-age=60"
        );
        assert_eq!(
            CachePolicy::shared_long().cache_control(),
            "s-maxage=86400,max-age=1800"
        );
    }

    #[test]
    fn cache_policy_accepts_literal_directives() {
        let policy = CachePolicy::from_value("no-store").unwrap();
        assert_eq!(policy.cache_control(), "no-store");
    }

    #[test]
    fn cache_policy_rejects_unusable_directives() {
        assert!(CachePolicy::from_value("max-age=60\nevil").is_err());
    }

    #[test]
    fn vary_is_always_authorization() {
        let [(control_name, _), (vary_name, vary_value)] = CachePolicy::default().headers();
        assert_eq!(control_name, header::CACHE_CONTROL);
        assert_eq!(vary_name, header::VARY);
        assert_eq!(vary_value, "authorization");
    }
}
