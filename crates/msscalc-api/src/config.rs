use std::path::PathBuf;

pub const LMS_TABLE_VAR: &str = "MSSCALC_LMS_TABLE";
pub const METS_COEFFICIENTS_VAR: &str = "MSSCALC_METS_COEFFICIENTS";
pub const BIND_ADDR_VAR: &str = "MSSCALC_BIND_ADDR";
/// Set by the Lambda runtime in every function environment.
pub const LAMBDA_RUNTIME_VAR: &str = "AWS_LAMBDA_RUNTIME_API";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// BMI-for-age LMS reference document.
    pub lms_table: PathBuf,
    /// MetS coefficient document.
    pub mets_coefficients: PathBuf,
    pub bind_addr: String,
    pub lambda: bool,
}

impl ApiConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| eyre::eyre!("{key} must be set to a reference data path"))
        };

        Ok(Self {
            lms_table: PathBuf::from(required(LMS_TABLE_VAR)?),
            mets_coefficients: PathBuf::from(required(METS_COEFFICIENTS_VAR)?),
            bind_addr: lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            lambda: lookup(LAMBDA_RUNTIME_VAR).is_some(),
        })
    }
}
