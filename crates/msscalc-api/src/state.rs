use std::sync::Arc;

use msscalc_reference::lms::LmsTable;
use msscalc_reference::mets::MetsModel;
use msscalc_reference::{BmiReference, ScoringModel};

use crate::config::ApiConfig;

/// Shared application state, injected into all route handlers via Axum state.
/// Read-only after startup; requests never mutate it.
#[derive(Clone)]
pub struct AppState {
    pub bmi_reference: Arc<dyn BmiReference>,
    pub scoring_model: Arc<dyn ScoringModel>,
}

impl AppState {
    pub fn load(config: &ApiConfig) -> eyre::Result<Self> {
        let lms = LmsTable::from_path(&config.lms_table)?;
        if lms.is_empty() {
            tracing::warn!(path = %config.lms_table.display(), "LMS table has no rows; BMI z-scores will be unavailable");
        }

        let mets = MetsModel::from_path(&config.mets_coefficients)?;
        tracing::info!(
            lms = %config.lms_table.display(),
            mets = %config.mets_coefficients.display(),
            strata = mets.len(),
            "reference data loaded"
        );

        Ok(Self {
            bmi_reference: Arc::new(lms),
            scoring_model: Arc::new(mets),
        })
    }
}
