use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unsupported {quantity} unit: {tag}")]
    UnsupportedUnit { quantity: &'static str, tag: String },

    #[error("unknown {kind}: {value}")]
    UnknownCategory { kind: &'static str, value: String },
}
