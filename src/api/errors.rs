use thiserror::Error;

use crate::db::StoreError;

/// Request-layer failures. Only `Validation` is recoverable: the dispatch
/// boundary turns it into the fixed Bad-Request response and every other
/// variant into the fixed Internal-Server-Error response. Field-level detail
/// never leaves the process.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid request payload")]
    Validation,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    #[error("no content type mapped for suffix: {0}")]
    UnknownSuffix(String),

    #[error("page template has no `{0}` placeholder")]
    Template(&'static str),
}

impl ApiError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation)
    }
}
