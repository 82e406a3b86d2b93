use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::demographics::{RaceEthnicity, Sex};

/// Age handed to the scoring model when no birth date was entered. It stands
/// for "adult of unspecified exact age", not a measurement.
pub const UNSPECIFIED_ADULT_AGE: i32 = 25;

/// The normalized, unit-converted record passed to a scoring model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRequest {
    pub age: i32,
    pub sex: Sex,
    pub race_ethnicity: RaceEthnicity,
    pub bmi: Option<f64>,
    pub hdl: f64,
    pub sbp: f64,
    pub triglyceride: f64,
    pub glucose: f64,
    pub bmi_z_score: Option<f64>,
    /// Waist circumference in centimeters.
    pub waist: Option<f64>,
}
