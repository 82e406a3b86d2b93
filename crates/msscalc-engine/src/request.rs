//! Score request assembly.

use msscalc_core::models::derived::DerivedFields;
use msscalc_core::models::inputs::RawInputs;
use msscalc_core::models::request::{ScoreRequest, UNSPECIFIED_ADULT_AGE};
use msscalc_core::numeric::parse_numeric;

use crate::error::EngineError;
use crate::fields::Field;

/// Waist is only sent for subjects older than this, or of unknown age.
///
/// Deliberately `> 20` while the adolescent band ends at `< 20`: a subject
/// aged exactly 20 is neither scored as an adolescent nor sent a waist
/// measurement. Kept literally; a probable defect, not to be fixed silently.
pub const WAIST_MIN_EXCLUSIVE_AGE: i32 = 20;

/// Build the normalized record handed to the scoring model.
///
/// Expects the snapshot to have passed [`can_submit`](crate::validation::can_submit);
/// a missing or unparseable required value is reported as an error rather
/// than defaulted.
pub fn build_score_request(
    inputs: &RawInputs,
    derived: &DerivedFields,
) -> Result<ScoreRequest, EngineError> {
    let sex = inputs.sex.ok_or(EngineError::MissingField(Field::Sex))?;
    let race_ethnicity = inputs
        .race_ethnicity
        .ok_or(EngineError::MissingField(Field::RaceEthnicity))?;

    let waist_allowed = derived
        .age_years
        .is_none_or(|age| age > WAIST_MIN_EXCLUSIVE_AGE);
    let waist = if waist_allowed && !inputs.waist.trim().is_empty() {
        inputs.waist().centimeters()
    } else {
        None
    };

    Ok(ScoreRequest {
        age: derived.age_years.unwrap_or(UNSPECIFIED_ADULT_AGE),
        sex,
        race_ethnicity,
        bmi: derived.bmi,
        hdl: required_number(Field::Hdl, &inputs.hdl)?,
        sbp: required_number(Field::Sbp, &inputs.sbp)?,
        triglyceride: required_number(Field::Triglyceride, &inputs.triglyceride)?,
        glucose: required_number(Field::Glucose, &inputs.glucose)?,
        bmi_z_score: derived.bmi_z_score,
        waist,
    })
}

fn required_number(field: Field, text: &str) -> Result<f64, EngineError> {
    if text.trim().is_empty() {
        return Err(EngineError::MissingField(field));
    }
    parse_numeric(text).ok_or_else(|| EngineError::Unparseable {
        field,
        text: text.to_string(),
    })
}
