//! BMI-for-age z-scores via the LMS method.
//!
//! A table is a set of (sex, age in months, L, M, S) rows, typically the CDC
//! 2000 growth reference. Rows are loaded from a versioned JSON document:
//!
//! ```json
//! { "version": 1, "rows": [ { "sex": "MALE", "age_months": 24.0, "l": -2.01, "m": 16.57, "s": 0.08 } ] }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use msscalc_core::models::demographics::Sex;

use crate::bmi::bmi_adult;
use crate::error::ReferenceError;
use crate::BmiReference;

const SUPPORTED_VERSION: u32 = 1;

/// Whole months are looked up at the middle of the month, matching the
/// half-month grid of the CDC tables.
const MID_MONTH_OFFSET: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LmsRow {
    pub sex: Sex,
    pub age_months: f64,
    pub l: f64,
    pub m: f64,
    pub s: f64,
}

/// Box-Cox power (L), median (M) and coefficient of variation (S).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LmsParams {
    pub l: f64,
    pub m: f64,
    pub s: f64,
}

impl LmsParams {
    /// Z-score of `value` under these parameters.
    pub fn z_score(&self, value: f64) -> f64 {
        if self.l == 0.0 {
            (value / self.m).ln() / self.s
        } else {
            ((value / self.m).powf(self.l) - 1.0) / (self.l * self.s)
        }
    }

    fn lerp(&self, other: &LmsParams, t: f64) -> LmsParams {
        LmsParams {
            l: self.l + (other.l - self.l) * t,
            m: self.m + (other.m - self.m) * t,
            s: self.s + (other.s - self.s) * t,
        }
    }
}

#[derive(Debug, Deserialize)]
struct LmsDocument {
    #[serde(default)]
    version: u32,
    rows: Vec<LmsRow>,
}

#[derive(Debug, Clone, Default)]
pub struct LmsTable {
    male: Vec<LmsRow>,
    female: Vec<LmsRow>,
}

impl LmsTable {
    pub fn from_rows(rows: Vec<LmsRow>) -> Result<Self, ReferenceError> {
        let mut table = LmsTable::default();

        for row in rows {
            let valid = row.age_months.is_finite()
                && row.l.is_finite()
                && row.m.is_finite()
                && row.m > 0.0
                && row.s.is_finite()
                && row.s > 0.0;
            if !valid {
                return Err(ReferenceError::InvalidRow(format!(
                    "{} at {} months: L={}, M={}, S={}",
                    row.sex, row.age_months, row.l, row.m, row.s
                )));
            }

            match row.sex {
                Sex::Male => table.male.push(row),
                Sex::Female => table.female.push(row),
            }
        }

        for rows in [&mut table.male, &mut table.female] {
            rows.sort_by(|a, b| a.age_months.total_cmp(&b.age_months));
            if let Some(pair) = rows.windows(2).find(|w| w[0].age_months == w[1].age_months) {
                return Err(ReferenceError::DuplicateRow(format!(
                    "{} at {} months",
                    pair[0].sex, pair[0].age_months
                )));
            }
        }

        tracing::debug!(
            male_rows = table.male.len(),
            female_rows = table.female.len(),
            "LMS table loaded"
        );
        Ok(table)
    }

    pub fn from_json(json: &str) -> Result<Self, ReferenceError> {
        let document: LmsDocument = serde_json::from_str(json)?;
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

    pub fn is_empty(&self) -> bool {
        self.male.is_empty() && self.female.is_empty()
    }

    /// Parameters at `age_months`, interpolating linearly between the
    /// surrounding rows. `None` outside the table's age range.
    pub fn params(&self, sex: Sex, age_months: f64) -> Option<LmsParams> {
        let rows = match sex {
            Sex::Male => &self.male,
            Sex::Female => &self.female,
        };

        let idx = rows.partition_point(|r| r.age_months < age_months);
        let upper = rows.get(idx)?;
        if upper.age_months == age_months {
            return Some(upper.params());
        }

        let lower = rows.get(idx.checked_sub(1)?)?;
        let t = (age_months - lower.age_months) / (upper.age_months - lower.age_months);
        Some(lower.params().lerp(&upper.params(), t))
    }
}

impl LmsRow {
    fn params(&self) -> LmsParams {
        LmsParams {
            l: self.l,
            m: self.m,
            s: self.s,
        }
    }
}

impl BmiReference for LmsTable {
    fn bmi_for_age(
        &self,
        weight_kg: f64,
        height_m: f64,
        sex: Sex,
        age_months: i32,
    ) -> Option<f64> {
        let params = self.params(sex, f64::from(age_months) + MID_MONTH_OFFSET)?;
        let z = params.z_score(bmi_adult(weight_kg, height_m));
        z.is_finite().then_some(z)
    }
}
