//! Update Product Handler

use std::sync::Arc;

use curio_app::products::ProductUpdate;
use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    errors::ApiError, extensions::*, products::errors, products::get::ProductResponse,
    state::State,
};

/// Update Product Request
///
/// Fields absent or empty keep their stored values; a zero price also
/// keeps the stored price.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProductRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl From<UpdateProductRequest> for ProductUpdate {
    fn from(request: UpdateProductRequest) -> Self {
        ProductUpdate {
            name: request.name,
            description: request.description,
            price: request.price,
            category: request.category,
            image: request.image,
        }
    }
}

/// Product Update Handler
#[endpoint(
    tags("products"),
    summary = "Update Product",
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
#[tracing::instrument(name = "products.update", skip_all)]
pub(crate) async fn handler(
    id: PathParam<String>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_record_id(errors::RESOURCE)?;

    let product = state
        .app
        .products
        .update(id, json.into_inner().into())
        .await
        .map_err(errors::into_api_error)?;

    tracing::info!(id = %id, price = product.price, "updated product");

    Ok(Json(product.into()))
}
