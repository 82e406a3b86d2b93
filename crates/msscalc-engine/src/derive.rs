//! Derived-field recomputation.
//!
//! [`recompute`] is a pure function of the snapshot: calling it twice on the
//! same inputs yields the same fields, and nothing from a previous snapshot
//! leaks into the next one.

use jiff::ToSpan;
use jiff::civil::Date;

use msscalc_core::models::derived::{DerivedFields, is_adolescent};
use msscalc_core::models::inputs::RawInputs;
use msscalc_reference::BmiReference;

pub fn recompute(inputs: &RawInputs, bmi_reference: &dyn BmiReference) -> DerivedFields {
    let age_years = match (inputs.birth_date, inputs.appointment_date) {
        (Some(birth), Some(appointment)) => whole_years_between(appointment, birth),
        _ => None,
    };

    let weight_kg = inputs.weight().kilograms();
    let height_m = inputs.height().meters();

    let bmi = match (weight_kg, height_m) {
        (Some(w), Some(h)) => Some(bmi_reference.bmi_adult(w, h)).filter(|b| b.is_finite()),
        _ => None,
    };

    let bmi_z_score = match (inputs.sex, bmi, weight_kg, height_m) {
        (Some(sex), Some(_), Some(w), Some(h)) if is_adolescent(age_years) => {
            match (inputs.birth_date, inputs.appointment_date) {
                (Some(birth), Some(appointment)) => whole_months_between(appointment, birth)
                    .and_then(|months| bmi_reference.bmi_for_age(w, h, sex, months)),
                _ => None,
            }
        }
        _ => None,
    };

    let derived = DerivedFields {
        age_years,
        bmi,
        bmi_z_score,
    };
    tracing::debug!(?derived, "derived fields recomputed");
    derived
}

/// Whole years from `birth` to `appointment`, truncated toward zero. Negative
/// when the birth date is after the appointment.
pub fn whole_years_between(appointment: Date, birth: Date) -> Option<i32> {
    whole_months_between(appointment, birth).map(|months| months / 12)
}

/// Whole months from `birth` to `appointment`, truncated toward zero.
///
/// A month counts once the monthly anniversary is reached, where the
/// anniversary falls on the last day of a month too short for the birth day
/// (2020-01-31 reaches one month on 2020-02-29).
pub fn whole_months_between(appointment: Date, birth: Date) -> Option<i32> {
    if appointment < birth {
        return whole_months_between(birth, appointment).map(|months| -months);
    }

    let estimate = (i32::from(appointment.year()) - i32::from(birth.year())) * 12
        + i32::from(appointment.month())
        - i32::from(birth.month());
    match birth.checked_add(estimate.months()) {
        Ok(anniversary) if anniversary > appointment => Some(estimate - 1),
        Ok(_) => Some(estimate),
        Err(e) => {
            tracing::warn!(%appointment, %birth, error = %e, "cannot compute age in months");
            None
        }
    }
}
