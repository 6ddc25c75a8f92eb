//! Receipt submission and points lookup endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use receipts_core::score;

use crate::dto::{PointsResponse, ProcessReceiptRequest, ProcessReceiptResponse};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::validate::parse_receipt;

/// Score a submitted receipt and store the result under a fresh id.
pub async fn process_receipt(
    State(state): State<AppState>,
    Json(req): Json<ProcessReceiptRequest>,
) -> ApiResult<(StatusCode, Json<ProcessReceiptResponse>)> {
    let receipt = parse_receipt(&req).map_err(|violations| {
        let fields = violations
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        tracing::debug!(violations = %fields, "receipt rejected by validation");
        ApiError::Validation(format!("invalid receipt: {fields}"))
    })?;

    let points = score::score(&receipt)?;
    let id = state.store.insert(&receipt, points).await?;

    tracing::info!(id = %id, points, "receipt processed");

    Ok((StatusCode::CREATED, Json(ProcessReceiptResponse { id })))
}

/// Points awarded to a previously processed receipt.
pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    let points = state.store.get(&id).await?;

    Ok(Json(PointsResponse { points }))
}
