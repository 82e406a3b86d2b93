//! Field identities and single-field edits of the input snapshot.

use std::fmt;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use msscalc_core::models::demographics::{RaceEthnicity, Sex};
use msscalc_core::models::inputs::RawInputs;
use msscalc_core::units::{LengthUnit, MassUnit};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Field {
    BirthDate,
    AppointmentDate,
    Sex,
    RaceEthnicity,
    Height,
    HeightUnit,
    Weight,
    WeightUnit,
    Waist,
    WaistUnit,
    Hdl,
    Sbp,
    Triglyceride,
    Glucose,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::BirthDate => "birth_date",
            Field::AppointmentDate => "appointment_date",
            Field::Sex => "sex",
            Field::RaceEthnicity => "race_ethnicity",
            Field::Height => "height",
            Field::HeightUnit => "height_unit",
            Field::Weight => "weight",
            Field::WeightUnit => "weight_unit",
            Field::Waist => "waist",
            Field::WaistUnit => "waist_unit",
            Field::Hdl => "hdl",
            Field::Sbp => "sbp",
            Field::Triglyceride => "triglyceride",
            Field::Glucose => "glucose",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One user edit. Serialized as `{ "field": "height", "value": "170" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum FieldChange {
    BirthDate(Option<Date>),
    AppointmentDate(Option<Date>),
    Sex(Option<Sex>),
    RaceEthnicity(Option<RaceEthnicity>),
    Height(String),
    HeightUnit(LengthUnit),
    Weight(String),
    WeightUnit(MassUnit),
    Waist(String),
    WaistUnit(LengthUnit),
    Hdl(String),
    Sbp(String),
    Triglyceride(String),
    Glucose(String),
}

impl FieldChange {
    pub fn field(&self) -> Field {
        match self {
            FieldChange::BirthDate(_) => Field::BirthDate,
            FieldChange::AppointmentDate(_) => Field::AppointmentDate,
            FieldChange::Sex(_) => Field::Sex,
            FieldChange::RaceEthnicity(_) => Field::RaceEthnicity,
            FieldChange::Height(_) => Field::Height,
            FieldChange::HeightUnit(_) => Field::HeightUnit,
            FieldChange::Weight(_) => Field::Weight,
            FieldChange::WeightUnit(_) => Field::WeightUnit,
            FieldChange::Waist(_) => Field::Waist,
            FieldChange::WaistUnit(_) => Field::WaistUnit,
            FieldChange::Hdl(_) => Field::Hdl,
            FieldChange::Sbp(_) => Field::Sbp,
            FieldChange::Triglyceride(_) => Field::Triglyceride,
            FieldChange::Glucose(_) => Field::Glucose,
        }
    }

    pub fn apply_to(self, inputs: &mut RawInputs) {
        match self {
            FieldChange::BirthDate(v) => inputs.birth_date = v,
            FieldChange::AppointmentDate(v) => inputs.appointment_date = v,
            FieldChange::Sex(v) => inputs.sex = v,
            FieldChange::RaceEthnicity(v) => inputs.race_ethnicity = v,
            FieldChange::Height(v) => inputs.height = v,
            FieldChange::HeightUnit(v) => inputs.height_unit = v,
            FieldChange::Weight(v) => inputs.weight = v,
            FieldChange::WeightUnit(v) => inputs.weight_unit = v,
            FieldChange::Waist(v) => inputs.waist = v,
            FieldChange::WaistUnit(v) => inputs.waist_unit = v,
            FieldChange::Hdl(v) => inputs.hdl = v,
            FieldChange::Sbp(v) => inputs.sbp = v,
            FieldChange::Triglyceride(v) => inputs.triglyceride = v,
            FieldChange::Glucose(v) => inputs.glucose = v,
        }
    }
}
