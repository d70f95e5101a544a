//! Path identifier parsing helpers.

use curio_app::catalog::RecordId;
use salvo::oapi::extract::PathParam;

use crate::errors::ApiError;

/// Parses decimal record ids out of path segments.
///
/// Non-numeric segments resolve to the resource's 404, never a parse
/// failure surfaced as a different status.
pub(crate) trait RecordIdExt {
    fn into_record_id(self, resource: &str) -> Result<RecordId, ApiError>;
}

impl RecordIdExt for PathParam<String> {
    fn into_record_id(self, resource: &str) -> Result<RecordId, ApiError> {
        self.into_inner()
            .parse()
            .map_err(|_ignored| ApiError::not_found(resource))
    }
}
