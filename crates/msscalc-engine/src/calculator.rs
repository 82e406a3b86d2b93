//! Interactive calculator session.
//!
//! Every edit recomputes the derived fields synchronously and discards any
//! previous score, so a result on screen always belongs to the inputs on
//! screen.

use std::sync::Arc;

use jiff::civil::Date;

use msscalc_core::models::derived::DerivedFields;
use msscalc_core::models::inputs::RawInputs;
use msscalc_core::models::result::ScoreResult;
use msscalc_reference::{BmiReference, ScoringModel};

use crate::derive::recompute;
use crate::error::SubmitError;
use crate::fields::FieldChange;
use crate::request::build_score_request;
use crate::summary::{ResultSummary, summarize};
use crate::validation::{FieldIssue, can_submit, field_issues};
use crate::visibility::{FieldVisibility, visibility};

pub struct Calculator {
    inputs: RawInputs,
    derived: DerivedFields,
    result: Option<ScoreResult>,
    bmi_reference: Arc<dyn BmiReference>,
    scoring_model: Arc<dyn ScoringModel>,
}

impl Calculator {
    /// Start an empty session with the appointment date set to `today`.
    pub fn new(
        bmi_reference: Arc<dyn BmiReference>,
        scoring_model: Arc<dyn ScoringModel>,
        today: Date,
    ) -> Self {
        Self::with_inputs(bmi_reference, scoring_model, RawInputs::new(today))
    }

    pub fn with_inputs(
        bmi_reference: Arc<dyn BmiReference>,
        scoring_model: Arc<dyn ScoringModel>,
        inputs: RawInputs,
    ) -> Self {
        let derived = recompute(&inputs, bmi_reference.as_ref());
        Self {
            inputs,
            derived,
            result: None,
            bmi_reference,
            scoring_model,
        }
    }

    pub fn inputs(&self) -> &RawInputs {
        &self.inputs
    }

    pub fn derived(&self) -> &DerivedFields {
        &self.derived
    }

    pub fn result(&self) -> Option<&ScoreResult> {
        self.result.as_ref()
    }

    /// Apply one edit, recompute derived fields, and clear the score.
    pub fn apply(&mut self, change: FieldChange) {
        tracing::debug!(field = %change.field(), "input changed");
        change.apply_to(&mut self.inputs);
        self.refresh();
    }

    /// Replace the whole snapshot, with the same effects as [`apply`](Self::apply).
    pub fn replace_inputs(&mut self, inputs: RawInputs) {
        self.inputs = inputs;
        self.refresh();
    }

    /// Gate, assemble and score the current snapshot.
    ///
    /// On any failure the session is left without a result; there is no
    /// partial commit.
    pub fn submit(&mut self) -> Result<&ScoreResult, SubmitError> {
        self.result = None;

        can_submit(&self.inputs, &self.derived)?;
        let request = build_score_request(&self.inputs, &self.derived)?;
        let result = self.scoring_model.calculate_score(&request).map_err(|e| {
            tracing::error!(model = self.scoring_model.id(), error = %e, "scoring failed");
            SubmitError::Scoring(e)
        })?;

        tracing::info!(
            model = self.scoring_model.id(),
            age = request.age,
            waist_included = request.waist.is_some(),
            "score computed"
        );
        let result: &ScoreResult = self.result.insert(result);
        Ok(result)
    }

    /// Dismiss the current result so the inputs can be revised.
    pub fn back(&mut self) {
        self.result = None;
    }

    pub fn visibility(&self) -> FieldVisibility {
        visibility(&self.inputs, &self.derived, self.result.as_ref())
    }

    pub fn issues(&self) -> Vec<FieldIssue> {
        field_issues(&self.inputs)
    }

    pub fn summary(&self) -> Option<ResultSummary> {
        self.result.as_ref().map(|r| summarize(&self.derived, r))
    }

    fn refresh(&mut self) {
        self.derived = recompute(&self.inputs, self.bmi_reference.as_ref());
        self.result = None;
    }
}
