//! Get Product Handler

use std::sync::Arc;

use curio_app::products::Product;
use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{errors::ApiError, extensions::*, products::errors, state::State};

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub id: u64,

    /// The product name
    pub name: String,

    /// The product description
    pub description: String,

    /// The price
    pub price: f64,

    /// The category, e.g. "Ceramics"
    pub category: String,

    /// The image URL
    pub image: String,

    /// The date and time the product was added
    #[serde(rename = "dateAdded")]
    pub date_added: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            id: product.id.value(),
            name: product.name,
            description: product.description,
            price: product.price,
            category: product.category,
            image: product.image,
            date_added: product.date_added.to_string(),
        }
    }
}

/// Get Product Handler
///
/// Returns a product.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "Product found"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_record_id(errors::RESOURCE)?;

    let product = state
        .app
        .products
        .get(id)
        .await
        .map_err(errors::into_api_error)?;

    Ok(Json(product.into()))
}
