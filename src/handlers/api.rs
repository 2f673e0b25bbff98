//! JSON API handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::features::LayoutInfo;
use crate::inference::{self, PredictionContext, PredictionView};
use crate::models::SessionInput;
use crate::{AppError, AppResult, AppState};

/// Predict from a JSON session; omitted fields take their defaults
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<SessionInput>, JsonRejection>,
) -> AppResult<Json<PredictionView>> {
    let Json(input) = payload.map_err(|e| AppError::ValidationError(e.body_text()))?;
    input.check()?;

    let ctx = PredictionContext::new(input);
    let view = inference::run(&state.client, &ctx).await?;

    Ok(Json(view))
}

/// Feature layout the encoder produces
pub async fn layout() -> Json<LayoutInfo> {
    Json(LayoutInfo::current())
}
