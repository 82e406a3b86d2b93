use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

use msscalc_reference::error::ReferenceError;

use crate::fields::Field;

/// Why the validation gate refused a submission. The first failing rule wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS, Error)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Rejection {
    #[error("missing required fields")]
    MissingRequiredFields,

    #[error("subject too young")]
    SubjectTooYoung,
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("missing required field: {0}")]
    MissingField(Field),

    #[error("{field} is not a number: {text:?}")]
    Unparseable { field: Field, text: String },
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("submission rejected: {0}")]
    Rejected(#[from] Rejection),

    #[error(transparent)]
    Request(#[from] EngineError),

    #[error("scoring failed: {0}")]
    Scoring(#[from] ReferenceError),
}
