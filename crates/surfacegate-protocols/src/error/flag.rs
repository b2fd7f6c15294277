//! Feature flag lookup errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlagError {
    #[error("Flag service unavailable: {0}")]
    Unavailable(String),

    #[error("Flag lookup timed out: {0}")]
    Timeout(String),

    #[error("Invalid flag response: {0}")]
    InvalidResponse(String),
}
