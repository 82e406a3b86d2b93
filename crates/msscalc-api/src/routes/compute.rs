use axum::Json;
use axum::extract::State;

use msscalc_core::models::inputs::RawInputs;
use msscalc_engine::Computation;

use crate::error::ApiError;
use crate::state::AppState;

/// Evaluate one form snapshot: derived fields, gate outcome and, when the
/// gate passes, the score. Stateless; nothing is kept between calls.
pub async fn compute(
    State(state): State<AppState>,
    Json(inputs): Json<RawInputs>,
) -> Result<Json<Computation>, ApiError> {
    let computation = msscalc_engine::compute(
        &inputs,
        state.bmi_reference.as_ref(),
        state.scoring_model.as_ref(),
    )?;
    Ok(Json(computation))
}
