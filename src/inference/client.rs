//! Inference API Client
//!
//! HTTP client for the remote intrusion model.

use std::time::Duration;

use reqwest::StatusCode;

use crate::config::Config;
use crate::features::FeatureVector;
use crate::models::{PredictRequest, PredictionResult, RawPrediction};

/// Inference endpoint configuration
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    pub endpoint_url: String,
    pub timeout: Duration,
    pub max_retries: u32,
    pub retry_backoff: Duration,
}

impl From<&Config> for InferenceConfig {
    fn from(config: &Config) -> Self {
        Self {
            endpoint_url: config.inference_url.clone(),
            timeout: config.inference_timeout(),
            max_retries: config.inference_max_retries,
            retry_backoff: config.retry_backoff(),
        }
    }
}

/// Inference API client
///
/// Holds no per-request state; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct InferenceClient {
    config: InferenceConfig,
    http_client: reqwest::Client,
}

impl InferenceClient {
    /// Create new inference client
    pub fn new(config: InferenceConfig) -> Result<Self, PredictionError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| PredictionError::Network(e.to_string()))?;

        Ok(Self { config, http_client })
    }

    /// Send the vector and wait for the classification.
    ///
    /// Retryable failures are re-attempted up to `max_retries` times; the
    /// caller sees a single outcome either way.
    pub async fn predict(&self, features: &FeatureVector) -> Result<PredictionResult, PredictionError> {
        let mut attempt = 0u32;

        loop {
            match self.send_once(features).await {
                Err(e) if e.is_retryable() && attempt < self.config.max_retries => {
                    attempt += 1;
                    tracing::warn!(
                        "Inference attempt {} failed ({}), retrying in {:?}",
                        attempt, e, self.config.retry_backoff
                    );
                    tokio::time::sleep(self.config.retry_backoff).await;
                }
                outcome => return outcome,
            }
        }
    }

    async fn send_once(&self, features: &FeatureVector) -> Result<PredictionResult, PredictionError> {
        let request = PredictRequest { features };

        let response = self.http_client
            .post(&self.config.endpoint_url)
            .json(&request)
            .send()
            .await
            .map_err(PredictionError::from_transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            let error_text = response.text().await.unwrap_or_default();
            tracing::debug!("Inference endpoint returned {}: {}", status, error_text);
            return Err(PredictionError::Status(status.as_u16()));
        }

        let body = response.bytes()
            .await
            .map_err(PredictionError::from_transport)?;

        let raw: RawPrediction = serde_json::from_slice(&body)
            .map_err(|e| PredictionError::MalformedBody(e.to_string()))?;

        let result = PredictionResult::from(raw);
        if result.is_degraded() {
            tracing::warn!(
                "Inference response missing {:?}, defaulted to 0 / 0.0",
                result.defaulted
            );
        }

        Ok(result)
    }
}

/// Inference client errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PredictionError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Endpoint returned status {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    MalformedBody(String),
}

impl PredictionError {
    fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            PredictionError::Timeout(err.to_string())
        } else if err.is_decode() {
            PredictionError::MalformedBody(err.to_string())
        } else {
            PredictionError::Network(err.to_string())
        }
    }

    /// Network failures, timeouts and 5xx responses
    pub fn is_retryable(&self) -> bool {
        match self {
            PredictionError::Network(_) | PredictionError::Timeout(_) => true,
            PredictionError::Status(code) => *code >= 500,
            PredictionError::MalformedBody(_) => false,
        }
    }
}
