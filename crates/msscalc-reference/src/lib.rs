//! msscalc-reference
//!
//! The reference collaborators the calculator depends on: BMI-for-age
//! growth tables and the MetS severity scoring model. Both are data driven,
//! loaded from JSON documents, and reached through the traits below so the
//! engine never depends on a particular table or coefficient set.

pub mod bmi;
pub mod error;
pub mod lms;
pub mod mets;
pub mod percentile;

use msscalc_core::models::demographics::Sex;
use msscalc_core::models::request::ScoreRequest;
use msscalc_core::models::result::ScoreResult;

use error::ReferenceError;

/// Pediatric BMI reference (LMS method).
pub trait BmiReference: Send + Sync {
    /// BMI-for-age z-score. `None` when the reference has no data for the
    /// given sex and age.
    fn bmi_for_age(&self, weight_kg: f64, height_m: f64, sex: Sex, age_months: i32)
    -> Option<f64>;

    /// Adult body-mass index.
    fn bmi_adult(&self, weight_kg: f64, height_m: f64) -> f64 {
        bmi::bmi_adult(weight_kg, height_m)
    }
}

/// A metabolic syndrome severity scoring model.
pub trait ScoringModel: Send + Sync {
    /// Identifier for logs (e.g., "mets-linear").
    fn id(&self) -> &str;

    /// Score a normalized request. Components that cannot be computed from
    /// the request are left absent; an `Err` means the request itself is
    /// unusable or the model misbehaved.
    fn calculate_score(&self, request: &ScoreRequest) -> Result<ScoreResult, ReferenceError>;
}
