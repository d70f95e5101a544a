//! Product Search Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{errors::ApiError, extensions::*, products::get::ProductResponse, state::State};

/// Product Search Handler
///
/// Case-insensitive substring match over name, description, and
/// category. An absent or empty `q` returns the full catalog.
#[endpoint(tags("products"), summary = "Search Products")]
pub(crate) async fn handler(
    q: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let query = q.into_inner().unwrap_or_default();

    let products = state.app.products.search(&query).await;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
