use std::path::PathBuf;

use axum::http::HeaderValue;

use playersearch_lookup::http::{DEFAULT_LOOKUP_TIMEOUT_SECS, DEFAULT_LOOKUP_URL};
use playersearch_store::config::DEFAULT_STORAGE_ROOT;
use playersearch_store::StoreConfig;

/// A configuration value could not be interpreted.
#[derive(Debug, thiserror::Error)]
#[error("Invalid value '{value}' for {var}: {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

/// Origins allowed to make cross-origin requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// `*`: any origin, without credentials.
    Any,
    /// An explicit allow-list.
    List(Vec<HeaderValue>),
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: CorsOrigins,
    /// HTTP request timeout in seconds (default: `90`, above the lookup timeout).
    pub request_timeout_secs: u64,
    /// Directory search results are persisted to and served from
    /// (default: `data`).
    pub data_dir: PathBuf,
    /// Base URL of the upstream player-search service.
    pub lookup_url: String,
    /// Upstream request timeout in seconds (default: `60`).
    pub lookup_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                               |
    /// |------------------------|-------------------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                             |
    /// | `PORT`                 | `3000`                                                |
    /// | `CORS_ORIGINS`         | `*`                                                   |
    /// | `REQUEST_TIMEOUT_SECS` | `90`                                                  |
    /// | `DATA_DIR`             | `data`                                                |
    /// | `LOOKUP_URL`           | `https://player-search-api-60b22a3031bd.herokuapp.com` |
    /// | `LOOKUP_TIMEOUT_SECS`  | `60`                                                  |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = parse_var(&var, "PORT", 3000)?;
        let cors_origins = parse_cors_origins(var("CORS_ORIGINS").as_deref().unwrap_or("*"))?;
        let request_timeout_secs: u64 = parse_var(&var, "REQUEST_TIMEOUT_SECS", 90)?;
        let data_dir = var("DATA_DIR")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_ROOT));
        let lookup_url = var("LOOKUP_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOOKUP_URL.into());
        let lookup_timeout_secs =
            parse_var(&var, "LOOKUP_TIMEOUT_SECS", DEFAULT_LOOKUP_TIMEOUT_SECS)?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            data_dir,
            lookup_url,
            lookup_timeout_secs,
        })
    }

    /// Artifact store configuration derived from `data_dir`.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(&self.data_dir)
    }
}

fn parse_var<F, T>(var: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match var(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError {
            var: key,
            value: raw.clone(),
            reason: e.to_string(),
        }),
    }
}

fn parse_cors_origins(raw: &str) -> Result<CorsOrigins, ConfigError> {
    let origins: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if origins.is_empty() || origins.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }

    origins
        .into_iter()
        .map(|o| {
            HeaderValue::from_str(o).map_err(|e| ConfigError {
                var: "CORS_ORIGINS",
                value: o.to_string(),
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.cors_origins, CorsOrigins::Any);
        assert_eq!(config.request_timeout_secs, 90);
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.lookup_url, DEFAULT_LOOKUP_URL);
        assert_eq!(config.lookup_timeout_secs, 60);
    }

    #[test]
    fn overrides_are_read() {
        let config = load(&[
            ("PORT", "8080"),
            ("DATA_DIR", "/var/lib/playersearch"),
            ("LOOKUP_URL", "http://upstream:9000"),
            ("CORS_ORIGINS", "http://localhost:5173, https://example.org"),
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.store_config().storage_root,
            PathBuf::from("/var/lib/playersearch")
        );
        assert_eq!(config.lookup_url, "http://upstream:9000");
        assert_eq!(
            config.cors_origins,
            CorsOrigins::List(vec![
                HeaderValue::from_static("http://localhost:5173"),
                HeaderValue::from_static("https://example.org"),
            ])
        );
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert_eq!(err.var, "PORT");
        assert_eq!(err.value, "eighty");
    }

    #[test]
    fn wildcard_anywhere_means_any_origin() {
        let config = load(&[("CORS_ORIGINS", "http://a.test,*")]).unwrap();
        assert_eq!(config.cors_origins, CorsOrigins::Any);
    }
}
