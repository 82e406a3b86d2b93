//! Linear MetS severity model.
//!
//! Each coefficient row covers one (sex, race/ethnicity, age band, adiposity
//! measure) stratum:
//!
//! `z = intercept + adiposity·a + hdl·h + sbp·s + ln(triglyceride)·t + glucose·g`
//!
//! Adolescent BMI rows take the BMI-for-age z-score as their adiposity
//! measure; adult rows take BMI or waist circumference (cm).

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use msscalc_core::models::demographics::{RaceEthnicity, Sex};
use msscalc_core::models::derived::ADOLESCENT_MAX_AGE;
use msscalc_core::models::request::ScoreRequest;
use msscalc_core::models::result::ScoreResult;

use crate::error::ReferenceError;
use crate::ScoringModel;

const SUPPORTED_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AgeBand {
    Adolescent,
    Adult,
}

impl AgeBand {
    pub fn for_age(age_years: i32) -> Self {
        if age_years < ADOLESCENT_MAX_AGE {
            AgeBand::Adolescent
        } else {
            AgeBand::Adult
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AdiposityMeasure {
    Bmi,
    Waist,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CoefficientRow {
    pub sex: Sex,
    pub race_ethnicity: RaceEthnicity,
    pub age_band: AgeBand,
    pub adiposity: AdiposityMeasure,
    pub intercept: f64,
    pub adiposity_coef: f64,
    pub hdl: f64,
    pub sbp: f64,
    pub ln_triglyceride: f64,
    pub glucose: f64,
}

impl CoefficientRow {
    fn evaluate(&self, adiposity: f64, request: &ScoreRequest) -> f64 {
        self.intercept
            + self.adiposity_coef * adiposity
            + self.hdl * request.hdl
            + self.sbp * request.sbp
            + self.ln_triglyceride * request.triglyceride.ln()
            + self.glucose * request.glucose
    }

    fn is_finite(&self) -> bool {
        [
            self.intercept,
            self.adiposity_coef,
            self.hdl,
            self.sbp,
            self.ln_triglyceride,
            self.glucose,
        ]
        .iter()
        .all(|c| c.is_finite())
    }
}

type StratumKey = (Sex, RaceEthnicity, AgeBand, AdiposityMeasure);

#[derive(Debug, Deserialize)]
struct CoefficientDocument {
    #[serde(default)]
    version: u32,
    rows: Vec<CoefficientRow>,
}

#[derive(Debug, Clone, Default)]
pub struct MetsModel {
    rows: HashMap<StratumKey, CoefficientRow>,
}

impl MetsModel {
    pub fn from_rows(rows: Vec<CoefficientRow>) -> Result<Self, ReferenceError> {
        let mut model = MetsModel::default();
        for row in rows {
            let key = (row.sex, row.race_ethnicity, row.age_band, row.adiposity);
            if !row.is_finite() {
                return Err(ReferenceError::InvalidRow(format!("{key:?}")));
            }
            if model.rows.insert(key, row).is_some() {
                return Err(ReferenceError::DuplicateRow(format!("{key:?}")));
            }
        }

        tracing::debug!(strata = model.rows.len(), "MetS coefficients loaded");
        Ok(model)
    }

    pub fn from_json(json: &str) -> Result<Self, ReferenceError> {
        let document: CoefficientDocument = serde_json::from_str(json)?;
        if document.version > SUPPORTED_VERSION {
            return Err(ReferenceError::UnsupportedVersion {
                found: document.version,
                supported: SUPPORTED_VERSION,
            });
        }
        Self::from_rows(document.rows)
    }

    pub fn from_path(path: &Path) -> Result<Self, ReferenceError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ReferenceError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&contents)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn component(
        &self,
        request: &ScoreRequest,
        measure: AdiposityMeasure,
        adiposity: Option<f64>,
        name: &'static str,
    ) -> Result<Option<f64>, ReferenceError> {
        let Some(adiposity) = adiposity else {
            return Ok(None);
        };
        let band = AgeBand::for_age(request.age);
        let Some(row) = self
            .rows
            .get(&(request.sex, request.race_ethnicity, band, measure))
        else {
            tracing::debug!(
                sex = %request.sex,
                race_ethnicity = %request.race_ethnicity,
                ?band,
                ?measure,
                "no coefficients for stratum"
            );
            return Ok(None);
        };

        let z = row.evaluate(adiposity, request);
        if !z.is_finite() {
            return Err(ReferenceError::NonFinite(name));
        }
        Ok(Some(z))
    }
}

impl ScoringModel for MetsModel {
    fn id(&self) -> &str {
        "mets-linear"
    }

    fn calculate_score(&self, request: &ScoreRequest) -> Result<ScoreResult, ReferenceError> {
        if request.triglyceride <= 0.0 {
            return Err(ReferenceError::InvalidInput(format!(
                "triglyceride must be positive, got {}",
                request.triglyceride
            )));
        }

        let bmi_adiposity = match AgeBand::for_age(request.age) {
            AgeBand::Adolescent => request.bmi_z_score,
            AgeBand::Adult => request.bmi,
        };

        Ok(ScoreResult {
            mets_z_bmi: self.component(request, AdiposityMeasure::Bmi, bmi_adiposity, "mets_z_bmi")?,
            mets_z_wc: self.component(request, AdiposityMeasure::Waist, request.waist, "mets_z_wc")?,
        })
    }
}
