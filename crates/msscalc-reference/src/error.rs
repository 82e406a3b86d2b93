use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to read reference data at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("reference data version {found} is newer than this build supports ({supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("invalid reference row: {0}")]
    InvalidRow(String),

    #[error("duplicate reference row: {0}")]
    DuplicateRow(String),

    #[error("invalid scoring input: {0}")]
    InvalidInput(String),

    #[error("scoring produced a non-finite {0}")]
    NonFinite(&'static str),
}
