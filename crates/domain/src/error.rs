/// Shared error type used across all CampaignKit crates.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Missing or malformed configuration (e.g. a bad encryption key).
    /// Fatal at first use, never retried.
    #[error("config: {0}")]
    Config(String),

    /// A serialized credential failed authentication or is structurally
    /// malformed. Distinct from `Config` so callers can tell "wrong key or
    /// tampered" apart from "not encrypted at all".
    #[error("corrupt or tampered credential: {0}")]
    Corrupt(String),

    /// Caller-contract violation rejected at the boundary.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
