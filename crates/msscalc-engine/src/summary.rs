use serde::Serialize;
use ts_rs::TS;

use msscalc_core::models::derived::DerivedFields;
use msscalc_core::models::result::ScoreResult;
use msscalc_reference::percentile::percentile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SummaryKind {
    BmiForAge,
    MetsBmi,
    MetsWaist,
}

impl SummaryKind {
    pub fn label(self) -> &'static str {
        match self {
            SummaryKind::BmiForAge => "BMI for adolescents",
            SummaryKind::MetsBmi => "MetS based on body mass index",
            SummaryKind::MetsWaist => "MetS based on waist circumference",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct SummaryEntry {
    pub kind: SummaryKind,
    pub label: String,
    /// Rounded to 3 decimals.
    pub z_score: f64,
    /// 0–100, rounded to 2 decimals.
    pub percentile: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct ResultSummary {
    pub entries: Vec<SummaryEntry>,
}

/// Display entries for a scored submission, in presentation order.
pub fn summarize(derived: &DerivedFields, result: &ScoreResult) -> ResultSummary {
    let adolescent_bmi_z = derived
        .bmi_z_score
        .filter(|_| derived.is_adolescent());

    let entries = [
        (SummaryKind::BmiForAge, adolescent_bmi_z),
        (SummaryKind::MetsBmi, result.mets_z_bmi),
        (SummaryKind::MetsWaist, result.mets_z_wc),
    ]
    .into_iter()
    .filter_map(|(kind, z)| {
        z.map(|z| SummaryEntry {
            kind,
            label: kind.label().to_string(),
            z_score: round_to(z, 3),
            percentile: round_to(percentile(z), 2),
        })
    })
    .collect();

    ResultSummary { entries }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
