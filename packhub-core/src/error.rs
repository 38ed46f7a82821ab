use thiserror::Error;

/// Why a raw package index was rejected.
///
/// Any variant invalidates the whole index: no record is admitted
/// when another record in the same document is malformed.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("JSON index error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML index error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("Package '{id}' has no versions")]
    EmptyGroup { id: String },

    #[error("Package record '{found}' listed under group '{group}'")]
    IdMismatch { group: String, found: String },

    #[error("Package record in group '{group}' has an empty '{field}'")]
    EmptyField { group: String, field: &'static str },
}

pub type Result<T> = std::result::Result<T, DecodeError>;
