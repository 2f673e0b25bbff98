//! Prediction cycle
//!
//! ```text
//! SessionInput ──encode──▶ FeatureVector ──POST──▶ inference endpoint
//!                                                        │
//!                  PredictionView ◀──interpret── PredictionResult
//! ```
//!
//! One `PredictionContext` per user trigger; nothing survives the request.

pub mod client;
pub mod interpret;

pub use client::{InferenceClient, InferenceConfig, PredictionError};
pub use interpret::PredictionView;

use tracing::Instrument;
use uuid::Uuid;

use crate::features::FeatureVector;
use crate::models::SessionInput;

/// Immutable request context passed through encode → call → render
#[derive(Debug, Clone)]
pub struct PredictionContext {
    pub request_id: Uuid,
    pub input: SessionInput,
    pub features: FeatureVector,
}

impl PredictionContext {
    pub fn new(input: SessionInput) -> Self {
        let features = FeatureVector::encode(&input);
        Self {
            request_id: Uuid::new_v4(),
            input,
            features,
        }
    }
}

/// Run one full prediction cycle
pub async fn run(client: &InferenceClient, ctx: &PredictionContext) -> Result<PredictionView, PredictionError> {
    let span = tracing::info_span!("prediction", request_id = %ctx.request_id);

    async {
        tracing::debug!("Encoded features: {}", ctx.features.to_log_entry());

        match client.predict(&ctx.features).await {
            Ok(result) => {
                let view = PredictionView::new(ctx.request_id, &result);
                tracing::info!(
                    "{} ({}, p={:.4})",
                    view.verdict_label, view.confidence_label, view.probability
                );
                Ok(view)
            }
            Err(e) => {
                tracing::warn!("Prediction failed: {}", e);
                Err(e)
            }
        }
    }
    .instrument(span)
    .await
}
