use serde::Serialize;
use ts_rs::TS;

use msscalc_core::models::derived::{ADOLESCENT_MAX_AGE, DerivedFields};
use msscalc_core::models::inputs::RawInputs;
use msscalc_core::models::result::ScoreResult;

/// Which parts of the form the view should show for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct FieldVisibility {
    pub appointment_date: bool,
    pub age: bool,
    pub waist: bool,
    pub bmi: bool,
    pub calculate: bool,
    pub results: bool,
}

pub fn visibility(
    inputs: &RawInputs,
    derived: &DerivedFields,
    result: Option<&ScoreResult>,
) -> FieldVisibility {
    let birth = inputs.birth_date.is_some();

    FieldVisibility {
        appointment_date: birth,
        age: birth && inputs.appointment_date.is_some(),
        // Hidden for any known age under 20, including under-2s the gate
        // will reject anyway.
        waist: !derived.age_years.is_some_and(|age| age < ADOLESCENT_MAX_AGE),
        bmi: derived.bmi.is_some(),
        calculate: result.is_none(),
        results: result.is_some(),
    }
}
