use thiserror::Error;

pub use crate::validation::ValidationError;

/// Failures talking to the persistence collaborator or decoding what it holds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    #[error("Storage is not available in this browser")]
    Unavailable,
    #[error("Storage backend error: {0}")]
    Backend(String),
    #[error("Could not encode records: {0}")]
    Encode(String),
    #[error("Stored data is malformed: {0}")]
    Malformed(String),
    #[error("Stored data has version {found}, newest supported is {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}

/// Failures of a savings-tips request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TipsError {
    #[error("Tips API key missing (set FAMILY_BUDGET_TIPS_API_KEY or point the endpoint at a proxy)")]
    MissingCredential,
    #[error("Could not encode tips request: {0}")]
    Encode(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Provider error {status}: {body}")]
    Provider { status: u16, body: String },
    #[error("Could not read provider response: {0}")]
    Decode(String),
}
