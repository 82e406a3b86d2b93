use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Output of a scoring model. An absent component means it could not be
/// computed from the inputs given, not that scoring failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    /// MetS z-score using body mass index (or BMI z-score for adolescents).
    pub mets_z_bmi: Option<f64>,
    /// MetS z-score using waist circumference.
    pub mets_z_wc: Option<f64>,
}

impl ScoreResult {
    pub fn is_empty(&self) -> bool {
        self.mets_z_bmi.is_none() && self.mets_z_wc.is_none()
    }
}
