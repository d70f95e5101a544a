//! Delete Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{errors::ApiError, extensions::*, products::errors, state::State};

/// Delete Product Handler
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Product deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<StatusCode, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_record_id(errors::RESOURCE)?;

    state
        .app
        .products
        .delete(id)
        .await
        .map_err(errors::into_api_error)?;

    tracing::info!(id = %id, "deleted product");

    Ok(StatusCode::NO_CONTENT)
}
