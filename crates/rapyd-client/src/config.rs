//! # Rapyd Configuration
//!
//! Credentials and environment selection for the client. Built once at
//! application start and read-only afterwards; credential rotation means
//! constructing a new client.

use rapyd_core::{RapydError, RapydResult};
use std::env;

const SANDBOX_BASE_URL: &str = "https://sandboxapi.rapyd.net";
const PRODUCTION_BASE_URL: &str = "https://api.rapyd.net";

/// Target environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Sandbox,
    Production,
}

impl Mode {
    fn base_url(&self) -> &'static str {
        match self {
            Mode::Sandbox => SANDBOX_BASE_URL,
            Mode::Production => PRODUCTION_BASE_URL,
        }
    }
}

/// Rapyd API configuration
#[derive(Debug, Clone)]
pub struct RapydConfig {
    /// Access key identifying the merchant account
    pub access_key: String,

    /// Secret key used to sign every request
    pub secret_key: String,

    /// Sandbox or production environment
    pub mode: Mode,

    /// API base URL (overridable for testing/mocking)
    pub api_base_url: String,
}

impl RapydConfig {
    /// Create config with explicit credentials
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>, mode: Mode) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            mode,
            api_base_url: mode.base_url().to_string(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `RAPYD_ACCESS_KEY`
    /// - `RAPYD_SECRET_KEY`
    ///
    /// Optional:
    /// - `RAPYD_MODE` (`sandbox` or `production`, default sandbox)
    pub fn from_env() -> RapydResult<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let access_key = env::var("RAPYD_ACCESS_KEY")
            .map_err(|_| RapydError::Configuration("RAPYD_ACCESS_KEY not set".to_string()))?;

        let secret_key = env::var("RAPYD_SECRET_KEY")
            .map_err(|_| RapydError::Configuration("RAPYD_SECRET_KEY not set".to_string()))?;

        let mode = match env::var("RAPYD_MODE").as_deref() {
            Ok("sandbox") | Err(_) => Mode::Sandbox,
            Ok("production") => Mode::Production,
            Ok(other) => {
                return Err(RapydError::Configuration(format!(
                    "RAPYD_MODE must be sandbox or production, got {other:?}"
                )))
            }
        };

        Ok(Self::new(access_key, secret_key, mode))
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Check if targeting the sandbox environment
    pub fn is_sandbox(&self) -> bool {
        self.mode == Mode::Sandbox
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_selects_base_url() {
        let sandbox = RapydConfig::new("ak", "sk", Mode::Sandbox);
        assert_eq!(sandbox.api_base_url, "https://sandboxapi.rapyd.net");
        assert!(sandbox.is_sandbox());

        let production = RapydConfig::new("ak", "sk", Mode::Production);
        assert_eq!(production.api_base_url, "https://api.rapyd.net");
        assert!(!production.is_sandbox());
    }

    #[test]
    fn test_base_url_override() {
        let config =
            RapydConfig::new("ak", "sk", Mode::Sandbox).with_api_base_url("http://127.0.0.1:9000");
        assert_eq!(config.api_base_url, "http://127.0.0.1:9000");
        // the mode is unchanged; only the URL is redirected
        assert!(config.is_sandbox());
    }
}
