use jiff::civil::Date;
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use super::demographics::{RaceEthnicity, Sex};
use crate::units::{LengthText, LengthUnit, MassText, MassUnit};

/// The user-editable snapshot behind the calculator form.
///
/// Numeric fields hold whatever text was typed so far; nothing is parsed
/// until a derived value or a score request needs it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct RawInputs {
    #[serde(deserialize_with = "lenient_date")]
    pub birth_date: Option<Date>,
    #[serde(deserialize_with = "lenient_date")]
    pub appointment_date: Option<Date>,
    pub sex: Option<Sex>,
    pub race_ethnicity: Option<RaceEthnicity>,

    pub height: String,
    pub height_unit: LengthUnit,
    pub weight: String,
    pub weight_unit: MassUnit,
    pub waist: String,
    pub waist_unit: LengthUnit,

    /// mg/dL
    pub hdl: String,
    /// mmHg
    pub sbp: String,
    /// mg/dL
    pub triglyceride: String,
    /// mg/dL
    pub glucose: String,
}

impl RawInputs {
    /// An empty form whose appointment date is `today`.
    pub fn new(today: Date) -> Self {
        Self {
            birth_date: None,
            appointment_date: Some(today),
            sex: None,
            race_ethnicity: None,
            height: String::new(),
            height_unit: LengthUnit::default(),
            weight: String::new(),
            weight_unit: MassUnit::default(),
            waist: String::new(),
            waist_unit: LengthUnit::default(),
            hdl: String::new(),
            sbp: String::new(),
            triglyceride: String::new(),
            glucose: String::new(),
        }
    }

    pub fn height(&self) -> LengthText<'_> {
        LengthText {
            value: &self.height,
            unit: self.height_unit,
        }
    }

    pub fn weight(&self) -> MassText<'_> {
        MassText {
            value: &self.weight,
            unit: self.weight_unit,
        }
    }

    pub fn waist(&self) -> LengthText<'_> {
        LengthText {
            value: &self.waist,
            unit: self.waist_unit,
        }
    }
}

impl Default for RawInputs {
    fn default() -> Self {
        Self::new(jiff::Zoned::now().date())
    }
}

/// Dates arrive from form fields as text; blank or malformed text means
/// "not entered yet" rather than a rejected request.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let Some(text) = raw.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    match text.parse::<Date>() {
        Ok(date) => Ok(Some(date)),
        Err(e) => {
            tracing::warn!(text = %text, error = %e, "ignoring unparseable date");
            Ok(None)
        }
    }
}
