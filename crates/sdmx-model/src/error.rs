//! Error types for the SDMX information model.

use thiserror::Error;

/// Errors raised while constructing or mutating model objects.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ModelError {
    /// A key referenced a component id absent from the owning DSD, and the
    /// caller did not request the DSD to be extended.
    #[error("component '{0}' is not declared in the data structure definition")]
    UnknownComponent(String),

    /// A dimension descriptor was asked to assign order to a component list
    /// that has no dimension-shaped components.
    #[error("component list '{0}' has no dimensions to order")]
    NotADimensionList(String),
}

/// Result type alias using [`ModelError`].
pub type Result<T> = std::result::Result<T, ModelError>;
