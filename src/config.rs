use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use url::Url;

use crate::core::NewsError;

const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;

/// Which cache store the binary runs with (`CACHE_BACKEND`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CacheBackend {
    /// Shared Redis server at `REDIS_URL`.
    #[default]
    Redis,
    /// Process-local map; nothing survives a restart.
    Memory,
}

impl FromStr for CacheBackend {
    type Err = NewsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "redis" => Ok(Self::Redis),
            "memory" => Ok(Self::Memory),
            other => Err(NewsError::Config(format!(
                "Invalid CACHE_BACKEND: {other} (expected redis or memory)"
            ))),
        }
    }
}

/// Runtime configuration of the service.
#[derive(Clone)]
pub struct Config {
    /// Deployment environment (`ENV`), e.g. `production` or `development`.
    pub environment: String,
    /// Finlight API key (`FINLIGHT_KEY`).
    pub finlight_key: String,
    /// Override for the Finlight endpoint (`FINLIGHT_BASE_URL`).
    pub finlight_base_url: Option<Url>,
    /// Cache store selection (`CACHE_BACKEND`).
    pub cache_backend: CacheBackend,
    /// Redis connection URL (`REDIS_URL`).
    pub redis_url: String,
    /// Address the HTTP server binds to (`HOST`, `PORT`).
    pub server_addr: SocketAddr,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("environment", &self.environment)
            .field("finlight_key", &"<redacted>")
            .field("finlight_base_url", &self.finlight_base_url)
            .field("cache_backend", &self.cache_backend)
            .field("redis_url", &self.redis_url)
            .field("server_addr", &self.server_addr)
            .finish()
    }
}

impl Config {
    /// Loads the configuration from `.env` (if present) and the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`NewsError::Config`] when a required variable is missing or a value is invalid.
    pub fn load() -> Result<Self, NewsError> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`NewsError::Config`] when a required variable is missing or a value is invalid.
    pub fn from_vars<F>(get: F) -> Result<Self, NewsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            get(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| NewsError::Config(format!("{key} is not set")))
        };

        let environment = required("ENV")?;
        let finlight_key = required("FINLIGHT_KEY")?;

        let finlight_base_url = get("FINLIGHT_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .map(|v| Url::parse(&v))
            .transpose()
            .map_err(|e| NewsError::Config(format!("Invalid FINLIGHT_BASE_URL: {e}")))?;

        let cache_backend = match get("CACHE_BACKEND").filter(|v| !v.trim().is_empty()) {
            Some(v) => v.parse()?,
            None => CacheBackend::default(),
        };
        let redis_url = get("REDIS_URL").unwrap_or_else(|| DEFAULT_REDIS_URL.to_string());

        let host = get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let ip = IpAddr::from_str(&host)
            .map_err(|e| NewsError::Config(format!("Invalid host address: {e}")))?;
        let port = match get("PORT") {
            Some(p) => p
                .parse::<u16>()
                .map_err(|e| NewsError::Config(format!("Invalid port: {e}")))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            environment,
            finlight_key,
            finlight_base_url,
            cache_backend,
            redis_url,
            server_addr: SocketAddr::new(ip, port),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
