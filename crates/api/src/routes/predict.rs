//! Prediction Route

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error};

use crate::AppState;
use feature_engine::{BuildError, FeatureRowBuilder};
use feature_mapper::{RecordNormalizer, VehicleRecord};
use inference_engine::InferenceError;

/// Response for the predict endpoint
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub predicted_price: f64,
}

/// Error body returned on prediction failure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Fatal errors surfaced by the predict endpoint
#[derive(Debug, Error)]
pub enum PredictError {
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error(transparent)]
    Inference(#[from] InferenceError),
}

impl IntoResponse for PredictError {
    fn into_response(self) -> Response {
        error!("prediction failed: {self}");
        let body = ErrorResponse {
            detail: format!("Prediction error: {self}"),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Predict a price for one vehicle record.
///
/// Request body shape/type validation happens in the `Json` extractor;
/// malformed bodies never reach the core.
pub async fn predict_price(
    State(state): State<Arc<AppState>>,
    Json(record): Json<VehicleRecord>,
) -> Result<Json<PredictResponse>, PredictError> {
    debug!(?record, "received vehicle record");

    let normalized = RecordNormalizer::new().normalize(&record);
    debug!(columns = normalized.len(), "normalized record");

    let row = FeatureRowBuilder::build(&normalized)?;
    let price = state.model.predict(&row)?;

    Ok(Json(PredictResponse {
        predicted_price: round2(price),
    }))
}

/// Round to 2 decimal places at the response edge.
///
/// Rounds half away from zero, not half to even; the two differ only on
/// exact float midpoints, which model output does not hit in practice.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
