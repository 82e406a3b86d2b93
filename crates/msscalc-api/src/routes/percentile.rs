use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Deserialize)]
pub struct PercentileRequest {
    pub z: f64,
}

#[derive(Serialize)]
pub struct PercentileResponse {
    pub percentile: f64,
}

pub async fn percentile(
    Json(req): Json<PercentileRequest>,
) -> Result<Json<PercentileResponse>, ApiError> {
    if !req.z.is_finite() {
        return Err(ApiError::BadRequest(format!("z must be finite, got {}", req.z)));
    }

    Ok(Json(PercentileResponse {
        percentile: msscalc_reference::percentile::percentile(req.z),
    }))
}
