//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CAFE_WORLD_API_URL` - Catalog API base URL (default: `http://localhost:5000`)
//! - `CAFE_WORLD_API_TOKEN` - Bearer token sent with catalog requests
//! - `CAFE_WORLD_CATALOG_DIR` - Read `shops.json`/`drinks.json` from this
//!   directory instead of calling the API
//! - `CAFE_WORLD_HTTP_TIMEOUT_SECS` - Catalog request timeout (default: 10)

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const DEFAULT_API_URL: &str = "http://localhost:5000";
const DEFAULT_HTTP_TIMEOUT_SECS: &str = "10";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Where the drink and shop lists come from.
#[derive(Clone)]
pub enum CatalogLocation {
    /// The catalog HTTP API.
    Api {
        base_url: Url,
        token: Option<SecretString>,
        timeout: Duration,
    },
    /// A directory holding `shops.json` and `drinks.json`.
    Directory(PathBuf),
}

// Implemented by hand so the token never reaches the logs.
impl std::fmt::Debug for CatalogLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Api {
                base_url,
                token,
                timeout,
            } => f
                .debug_struct("Api")
                .field("base_url", &base_url.as_str())
                .field("token", &token.as_ref().map(|_| "[REDACTED]"))
                .field("timeout", timeout)
                .finish(),
            Self::Directory(dir) => f.debug_tuple("Directory").field(dir).finish(),
        }
    }
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    pub catalog: CatalogLocation,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let catalog = match get_optional_env("CAFE_WORLD_CATALOG_DIR") {
            Some(dir) => CatalogLocation::Directory(PathBuf::from(dir)),
            None => {
                let base_url = parse_base_url(
                    "CAFE_WORLD_API_URL",
                    &get_env_or_default("CAFE_WORLD_API_URL", DEFAULT_API_URL),
                )?;
                api_location_from_env(base_url)?
            }
        };

        Ok(Self { catalog })
    }

    /// Read the catalog from `dir` regardless of the environment.
    #[must_use]
    pub fn with_catalog_dir(mut self, dir: PathBuf) -> Self {
        self.catalog = CatalogLocation::Directory(dir);
        self
    }

    /// Point at another API base URL, keeping token and timeout.
    ///
    /// When the catalog was a directory, token and timeout come from
    /// `CAFE_WORLD_API_TOKEN` and `CAFE_WORLD_HTTP_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if `url` or the timeout does not
    /// parse.
    pub fn with_api_url(mut self, url: &str) -> Result<Self, ConfigError> {
        let base_url = parse_base_url("--api-url", url)?;
        self.catalog = match self.catalog {
            CatalogLocation::Api { token, timeout, .. } => CatalogLocation::Api {
                base_url,
                token,
                timeout,
            },
            CatalogLocation::Directory(_) => api_location_from_env(base_url)?,
        };
        Ok(self)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable, treating empty values as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

/// API location for `base_url` with token and timeout taken from the environment.
fn api_location_from_env(base_url: Url) -> Result<CatalogLocation, ConfigError> {
    let timeout = parse_timeout(
        "CAFE_WORLD_HTTP_TIMEOUT_SECS",
        &get_env_or_default("CAFE_WORLD_HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS),
    )?;
    Ok(CatalogLocation::Api {
        base_url,
        token: get_optional_env("CAFE_WORLD_API_TOKEN").map(SecretString::from),
        timeout,
    })
}

/// Parse a catalog base URL; only `http` and `https` are accepted.
fn parse_base_url(var_name: &str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    Ok(url)
}

/// Parse a timeout in whole seconds; zero is rejected.
fn parse_timeout(var_name: &str, value: &str) -> Result<Duration, ConfigError> {
    let secs = value
        .trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;
    if secs == 0 {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            "timeout must be at least 1 second".to_string(),
        ));
    }
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    fn api_config() -> StorefrontConfig {
        StorefrontConfig {
            catalog: CatalogLocation::Api {
                base_url: Url::parse(DEFAULT_API_URL).unwrap(),
                token: Some(SecretString::from("super_secret_catalog_token")),
                timeout: Duration::from_secs(5),
            },
        }
    }

    #[test]
    fn test_parse_base_url_accepts_http() {
        let url = parse_base_url("TEST_VAR", "http://localhost:5000").unwrap();
        assert_eq!(url.port(), Some(5000));
    }

    #[test]
    fn test_parse_base_url_rejects_other_schemes() {
        let err = parse_base_url("TEST_VAR", "ftp://example.com").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));
    }

    #[test]
    fn test_parse_base_url_rejects_garbage() {
        assert!(parse_base_url("TEST_VAR", "not a url").is_err());
    }

    #[test]
    fn test_parse_timeout() {
        assert_eq!(
            parse_timeout("TEST_VAR", "30").unwrap(),
            Duration::from_secs(30)
        );
        assert!(parse_timeout("TEST_VAR", "0").is_err());
        assert!(parse_timeout("TEST_VAR", "soon").is_err());
    }

    #[test]
    fn test_with_api_url_keeps_token_and_timeout() {
        let config = api_config().with_api_url("https://catalog.example").unwrap();
        let CatalogLocation::Api {
            base_url,
            token,
            timeout,
        } = config.catalog
        else {
            panic!("expected API location");
        };
        assert_eq!(base_url.host_str(), Some("catalog.example"));
        assert!(token.is_some());
        assert_eq!(timeout, Duration::from_secs(5));
    }

    #[test]
    #[allow(unsafe_code)]
    fn test_with_api_url_from_directory_reads_env() {
        // SAFETY: no other test in this crate touches these variables.
        unsafe {
            std::env::set_var("CAFE_WORLD_API_TOKEN", "dir_switch_token");
            std::env::remove_var("CAFE_WORLD_HTTP_TIMEOUT_SECS");
        }

        let config = StorefrontConfig {
            catalog: CatalogLocation::Directory(PathBuf::from("fixtures")),
        }
        .with_api_url("http://localhost:5001")
        .unwrap();

        unsafe {
            std::env::remove_var("CAFE_WORLD_API_TOKEN");
        }

        let CatalogLocation::Api { token, timeout, .. } = config.catalog else {
            panic!("expected API location");
        };
        assert_eq!(
            token.as_ref().map(ExposeSecret::expose_secret),
            Some("dir_switch_token")
        );
        assert_eq!(
            timeout,
            parse_timeout("TEST_VAR", DEFAULT_HTTP_TIMEOUT_SECS).unwrap()
        );
    }

    #[test]
    fn test_with_catalog_dir_overrides_api() {
        let config = api_config().with_catalog_dir(PathBuf::from("fixtures"));
        assert!(matches!(config.catalog, CatalogLocation::Directory(_)));
    }

    #[test]
    fn test_debug_redacts_token() {
        let debug_output = format!("{:?}", api_config());
        assert!(debug_output.contains("localhost:5000"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_catalog_token"));
    }
}
