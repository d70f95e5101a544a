//! Catalog errors.

use thiserror::Error;

/// Failure modes of catalog repository operations.
///
/// Nothing here is fatal to the process; every operation returns its
/// outcome to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A create draft is missing at least one required field.
    #[error("missing required fields")]
    MissingRequiredFields,

    /// No record with the requested identifier exists.
    #[error("record not found")]
    NotFound,
}
