//! Configuration module

use std::env;
use std::time::Duration;

/// Endpoint the dashboard was deployed against
pub const DEFAULT_INFERENCE_URL: &str = "https://e-eeeema-intrusion-detection.hf.space/predict";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Remote inference endpoint (POST, JSON body `{"features": [...]}`)
    pub inference_url: String,

    /// Per-attempt timeout in seconds
    pub inference_timeout_secs: u64,

    /// Extra attempts after the first one (0 = single attempt)
    pub inference_max_retries: u32,

    /// Pause between attempts in milliseconds
    pub inference_retry_backoff_ms: u64,

    /// Environment (development, production)
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            inference_url: DEFAULT_INFERENCE_URL.to_string(),
            inference_timeout_secs: 30,
            inference_max_retries: 0,
            inference_retry_backoff_ms: 500,
            environment: "development".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    /// Missing or unparseable values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),

            inference_url: lookup("INFERENCE_API_URL")
                .filter(|u| !u.trim().is_empty())
                .unwrap_or(defaults.inference_url),

            inference_timeout_secs: lookup("INFERENCE_TIMEOUT_SECS")
                .and_then(|t| t.parse().ok())
                .filter(|t| *t > 0)
                .unwrap_or(defaults.inference_timeout_secs),

            inference_max_retries: lookup("INFERENCE_MAX_RETRIES")
                .and_then(|r| r.parse().ok())
                .unwrap_or(defaults.inference_max_retries),

            inference_retry_backoff_ms: lookup("INFERENCE_RETRY_BACKOFF_MS")
                .and_then(|b| b.parse().ok())
                .unwrap_or(defaults.inference_retry_backoff_ms),

            environment: lookup("ENVIRONMENT")
                .unwrap_or(defaults.environment),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn inference_timeout(&self) -> Duration {
        Duration::from_secs(self.inference_timeout_secs)
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.inference_retry_backoff_ms)
    }

    /// Host part of the inference URL, for logs and the health endpoint
    pub fn inference_host(&self) -> &str {
        let without_scheme = self.inference_url
            .split("://")
            .nth(1)
            .unwrap_or(&self.inference_url);
        without_scheme.split('/').next().unwrap_or(without_scheme)
    }
}
