//! Story Errors

use curio_app::catalog::CatalogError;

use crate::errors::ApiError;

/// Resource name used in not-found bodies and id parsing.
pub(crate) const RESOURCE: &str = "Story";

pub(crate) fn into_api_error(error: CatalogError) -> ApiError {
    match error {
        CatalogError::MissingRequiredFields => ApiError::missing_required_fields(),
        CatalogError::NotFound => ApiError::not_found(RESOURCE),
    }
}
