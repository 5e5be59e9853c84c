//! Error types for URN decoding.

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum UrnError {
    #[error("'{0}' is not a well-formed SDMX URN")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, UrnError>;
