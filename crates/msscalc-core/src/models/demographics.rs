use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum Sex {
    Male,
    Female,
}

/// Race/ethnicity groups the MetS reference population was stratified by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum RaceEthnicity {
    Hispanic,
    /// Non-Hispanic Black.
    Black,
    /// Non-Hispanic White.
    White,
}

impl Sex {
    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Male => "MALE",
            Sex::Female => "FEMALE",
        }
    }
}

impl RaceEthnicity {
    pub fn as_str(self) -> &'static str {
        match self {
            RaceEthnicity::Hispanic => "HISPANIC",
            RaceEthnicity::Black => "BLACK",
            RaceEthnicity::White => "WHITE",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RaceEthnicity::Hispanic => "Hispanic",
            RaceEthnicity::Black => "Non-Hispanic Black",
            RaceEthnicity::White => "Non-Hispanic White",
        }
    }
}

impl FromStr for Sex {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MALE" => Ok(Sex::Male),
            "FEMALE" => Ok(Sex::Female),
            other => Err(CoreError::UnknownCategory {
                kind: "sex",
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for RaceEthnicity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HISPANIC" => Ok(RaceEthnicity::Hispanic),
            "BLACK" => Ok(RaceEthnicity::Black),
            "WHITE" => Ok(RaceEthnicity::White),
            other => Err(CoreError::UnknownCategory {
                kind: "race/ethnicity",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for RaceEthnicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
