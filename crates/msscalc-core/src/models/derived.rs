use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Lower bound (inclusive) of the adolescent band, in whole years.
pub const ADOLESCENT_MIN_AGE: i32 = 2;
/// Upper bound (exclusive) of the adolescent band, in whole years.
pub const ADOLESCENT_MAX_AGE: i32 = 20;

/// Values computed from [`RawInputs`](super::inputs::RawInputs); never edited
/// directly. `None` means "not derivable from the current inputs".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DerivedFields {
    /// Whole years between birth and appointment.
    pub age_years: Option<i32>,
    pub bmi: Option<f64>,
    /// BMI-for-age z-score, adolescents only.
    pub bmi_z_score: Option<f64>,
}

impl DerivedFields {
    pub fn is_adolescent(&self) -> bool {
        is_adolescent(self.age_years)
    }
}

/// Ages in `[2, 20)` are classified adolescent. Unknown age is not.
pub fn is_adolescent(age_years: Option<i32>) -> bool {
    age_years.is_some_and(|age| (ADOLESCENT_MIN_AGE..ADOLESCENT_MAX_AGE).contains(&age))
}
