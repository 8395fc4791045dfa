use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid payload: expected a JSON object, found {found}")]
    InvalidPayload { found: &'static str },
    #[error("invalid field name: {0:?}")]
    InvalidFieldName(String),
    #[error("unknown role: {0}")]
    UnknownRole(String),
    #[error("unknown admin encoding: {0}")]
    UnknownEncoding(String),
    #[error("invalid json")]
    Json(#[from] serde_json::Error),
    #[error("session lock poisoned")]
    LockPoisoned,
}
