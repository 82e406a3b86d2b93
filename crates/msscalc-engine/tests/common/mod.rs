#![allow(dead_code)]

use std::sync::Mutex;

use jiff::civil::{Date, date};
use msscalc_core::models::demographics::{RaceEthnicity, Sex};
use msscalc_core::models::inputs::RawInputs;
use msscalc_core::models::request::ScoreRequest;
use msscalc_core::models::result::ScoreResult;
use msscalc_reference::error::ReferenceError;
use msscalc_reference::{BmiReference, ScoringModel};

pub const APPOINTMENT: Date = date(2024, 6, 15);

/// Reports the same z-score for every adolescent lookup.
pub struct FixedBmiZ(pub f64);

impl BmiReference for FixedBmiZ {
    fn bmi_for_age(&self, _: f64, _: f64, _: Sex, _: i32) -> Option<f64> {
        Some(self.0)
    }
}

/// Echoes BMI and waist back as the two components and keeps every request.
#[derive(Default)]
pub struct RecordingModel {
    pub requests: Mutex<Vec<ScoreRequest>>,
}

impl RecordingModel {
    pub fn last(&self) -> Option<ScoreRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

impl ScoringModel for RecordingModel {
    fn id(&self) -> &str {
        "recording"
    }

    fn calculate_score(&self, request: &ScoreRequest) -> Result<ScoreResult, ReferenceError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(ScoreResult {
            mets_z_bmi: request.bmi.map(|_| 0.25),
            mets_z_wc: request.waist.map(|_| -0.5),
        })
    }
}

pub struct FailingModel;

impl ScoringModel for FailingModel {
    fn id(&self) -> &str {
        "failing"
    }

    fn calculate_score(&self, _: &ScoreRequest) -> Result<ScoreResult, ReferenceError> {
        Err(ReferenceError::NonFinite("mets_z_bmi"))
    }
}

/// A complete adult form without a birth date.
pub fn complete_inputs() -> RawInputs {
    let mut inputs = RawInputs::new(APPOINTMENT);
    inputs.sex = Some(Sex::Female);
    inputs.race_ethnicity = Some(RaceEthnicity::White);
    inputs.height = "160".to_string();
    inputs.weight = "60".to_string();
    inputs.sbp = "120".to_string();
    inputs.hdl = "50".to_string();
    inputs.triglyceride = "120".to_string();
    inputs.glucose = "75".to_string();
    inputs
}

/// [`complete_inputs`] with a birth date exactly `years` before the appointment.
pub fn aged(years: i16) -> RawInputs {
    let mut inputs = complete_inputs();
    inputs.birth_date = Some(date(2024 - years, 6, 15));
    inputs
}
