//! Flag metadata parse errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetadataParseError {
    #[error("Flag metadata is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
