//! Submission gate and per-field advisory checks.

use serde::Serialize;
use ts_rs::TS;

use msscalc_core::models::derived::DerivedFields;
use msscalc_core::models::inputs::RawInputs;
use msscalc_core::numeric::{is_set, parse_numeric};

use crate::error::Rejection;
use crate::fields::Field;

/// Youngest age, in whole years, the score is defined for.
pub const MINIMUM_AGE: i32 = 2;

/// Decide whether the snapshot may be scored. Rules run in order:
///
/// 1. sex, race/ethnicity, SBP, glucose, HDL and triglyceride are all set;
/// 2. height and weight are set, or waist is set;
/// 3. a known age is at least [`MINIMUM_AGE`].
///
/// Rules 1 and 2 share the same reason. Does not mutate anything.
pub fn can_submit(inputs: &RawInputs, derived: &DerivedFields) -> Result<(), Rejection> {
    let demographics_and_labs = inputs.sex.is_some()
        && inputs.race_ethnicity.is_some()
        && is_set(&inputs.sbp)
        && is_set(&inputs.glucose)
        && is_set(&inputs.hdl)
        && is_set(&inputs.triglyceride);
    if !demographics_and_labs {
        return Err(Rejection::MissingRequiredFields);
    }

    let body_composition =
        (is_set(&inputs.height) && is_set(&inputs.weight)) || is_set(&inputs.waist);
    if !body_composition {
        return Err(Rejection::MissingRequiredFields);
    }

    if derived.age_years.is_some_and(|age| age < MINIMUM_AGE) {
        return Err(Rejection::SubjectTooYoung);
    }

    Ok(())
}

/// Gate outcome in wire form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Validation {
    pub ok: bool,
    pub reason: Option<String>,
}

impl From<Result<(), Rejection>> for Validation {
    fn from(gate: Result<(), Rejection>) -> Self {
        match gate {
            Ok(()) => Validation {
                ok: true,
                reason: None,
            },
            Err(rejection) => Validation {
                ok: false,
                reason: Some(rejection.to_string()),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum IssueKind {
    Required,
    NotANumber,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct FieldIssue {
    pub field: Field,
    pub kind: IssueKind,
}

/// Inline field problems for the form. Advisory only; submission is decided
/// by [`can_submit`].
pub fn field_issues(inputs: &RawInputs) -> Vec<FieldIssue> {
    let mut issues = Vec::new();

    if inputs.sex.is_none() {
        issues.push(FieldIssue {
            field: Field::Sex,
            kind: IssueKind::Required,
        });
    }
    if inputs.race_ethnicity.is_none() {
        issues.push(FieldIssue {
            field: Field::RaceEthnicity,
            kind: IssueKind::Required,
        });
    }

    // Either body-composition path satisfies the gate, so height and weight
    // are only demanded when no waist was given.
    let anthropometrics_required = !is_set(&inputs.waist);
    let numeric_fields = [
        (Field::Height, &inputs.height, anthropometrics_required),
        (Field::Weight, &inputs.weight, anthropometrics_required),
        (Field::Waist, &inputs.waist, false),
        (Field::Sbp, &inputs.sbp, true),
        (Field::Hdl, &inputs.hdl, true),
        (Field::Triglyceride, &inputs.triglyceride, true),
        (Field::Glucose, &inputs.glucose, true),
    ];

    for (field, text, required) in numeric_fields {
        if let Some(kind) = numeric_issue(text, required) {
            issues.push(FieldIssue { field, kind });
        }
    }

    issues
}

fn numeric_issue(text: &str, required: bool) -> Option<IssueKind> {
    if text.trim().is_empty() {
        return required.then_some(IssueKind::Required);
    }
    match parse_numeric(text) {
        None => Some(IssueKind::NotANumber),
        Some(value) if value < 0.0 => Some(IssueKind::Negative),
        Some(_) => None,
    }
}
