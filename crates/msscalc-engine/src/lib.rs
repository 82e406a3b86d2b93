//! msscalc-engine
//!
//! Keeps derived clinical fields consistent with raw form input, gates
//! submission on cross-field preconditions, and assembles the normalized
//! request handed to a scoring model.
//!
//! Two entry points share the same pure functions: [`calculator::Calculator`]
//! for an interactive session that mutates one field at a time, and
//! [`compute`] for stateless per-request evaluation.

pub mod calculator;
pub mod derive;
pub mod error;
pub mod fields;
pub mod request;
pub mod summary;
pub mod validation;
pub mod visibility;

use serde::Serialize;
use ts_rs::TS;

use msscalc_core::models::derived::DerivedFields;
use msscalc_core::models::inputs::RawInputs;
use msscalc_core::models::request::ScoreRequest;
use msscalc_core::models::result::ScoreResult;
use msscalc_reference::{BmiReference, ScoringModel};

use error::SubmitError;
use summary::ResultSummary;
use validation::{FieldIssue, Validation};
use visibility::FieldVisibility;

/// Everything the engine knows about one input snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Computation {
    pub derived: DerivedFields,
    pub visibility: FieldVisibility,
    pub issues: Vec<FieldIssue>,
    pub validation: Validation,
    pub request: Option<ScoreRequest>,
    pub result: Option<ScoreResult>,
    pub summary: Option<ResultSummary>,
}

/// Evaluate a snapshot end to end without any session state.
///
/// A gate rejection is reported through [`Computation::validation`]; only a
/// failure inside the scoring model is an `Err`.
pub fn compute(
    inputs: &RawInputs,
    bmi_reference: &dyn BmiReference,
    scoring_model: &dyn ScoringModel,
) -> Result<Computation, SubmitError> {
    let derived = derive::recompute(inputs, bmi_reference);
    let issues = validation::field_issues(inputs);
    let gate = validation::can_submit(inputs, &derived);

    let (request, result) = match gate {
        Ok(()) => {
            let request = request::build_score_request(inputs, &derived)?;
            let result = scoring_model.calculate_score(&request)?;
            tracing::info!(model = scoring_model.id(), "score computed");
            (Some(request), Some(result))
        }
        Err(reason) => {
            tracing::debug!(%reason, "submission gated");
            (None, None)
        }
    };

    Ok(Computation {
        visibility: visibility::visibility(inputs, &derived, result.as_ref()),
        summary: result.as_ref().map(|r| summary::summarize(&derived, r)),
        derived,
        issues,
        validation: Validation::from(gate),
        request,
        result,
    })
}
