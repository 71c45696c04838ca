use crate::constants::{BASE_URL_ENV, DEFAULT_BASE_URL};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the flask-catalyst API client
pub struct Config {
    /// Base URL for the flask-catalyst REST API
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment.
    ///
    /// Loads `.env` if present, then reads `CATALYST_BASE_URL`, falling back
    /// to `http://localhost:5000/api`. The value is resolved once here and is
    /// not reconfigurable afterwards.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("loaded .env file"),
            Err(e) => debug!("no .env file loaded: {e}"),
        }

        let base_url = get_env_or_default(BASE_URL_ENV, String::from(DEFAULT_BASE_URL));
        Self { base_url }
    }

    /// Creates a configuration pointing at an explicit base URL.
    ///
    /// Mainly useful in tests and when embedding the client against a
    /// non-default backend.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_base_url_is_kept_verbatim() {
        let config = Config::with_base_url("http://example.com/api/");
        assert_eq!(config.base_url, "http://example.com/api/");
    }

    #[test]
    fn default_base_url_points_at_local_backend() {
        assert_eq!(DEFAULT_BASE_URL, "http://localhost:5000/api");
    }
}
