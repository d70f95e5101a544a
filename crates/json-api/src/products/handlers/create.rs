//! Create Product Handler

use std::sync::Arc;

use curio_app::products::NewProduct;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    errors::ApiError, extensions::*, products::errors, products::get::ProductResponse,
    state::State,
};

/// Create Product Request
///
/// Every field is optional on the wire; the repository rejects drafts
/// missing name, description, price, or category.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
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

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        NewProduct {
            name: request.name.unwrap_or_default(),
            description: request.description.unwrap_or_default(),
            price: request.price,
            category: request.category.unwrap_or_default(),
            image: request.image,
        }
    }
}

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing required fields"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .create(json.into_inner().into())
        .await
        .map_err(errors::into_api_error)?;

    res.add_header(LOCATION, format!("/api/products/{}", product.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(id = %product.id, "created product");

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use curio_app::context::AppContext;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use crate::{errors::ErrorBody, test_helpers::catalog_service};

    use super::*;

    fn make_service(app: AppContext) -> Service {
        catalog_service(app, Router::with_path("api/products").post(handler))
    }

    #[tokio::test]
    async fn test_create_returns_201_with_record_and_location() -> TestResult {
        let app = AppContext::seeded()?;

        let mut res = TestClient::post("http://example.com/api/products")
            .json(&json!({
                "name": "Stained Glass Lamp",
                "description": "Tiffany-style lamp with floral pattern",
                "price": 120.50,
                "category": "Glasswork",
            }))
            .send(&make_service(app.clone()))
            .await;

        let body: ProductResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some("/api/products/4"));
        assert_eq!(body.id, 4);
        assert_eq!(body.name, "Stained Glass Lamp");
        assert_eq!(app.products.list().await.len(), 4);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_defaults_missing_image_to_placeholder() -> TestResult {
        let app = AppContext::empty();

        let mut res = TestClient::post("http://example.com/api/products")
            .json(&json!({
                "name": "Clay Bowl",
                "description": "Small hand-thrown bowl",
                "price": 18.0,
                "category": "Ceramics",
            }))
            .send(&make_service(app))
            .await;

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(body.image, curio_app::products::models::PLACEHOLDER_IMAGE);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_missing_fields_returns_400_and_mutates_nothing() -> TestResult {
        let app = AppContext::seeded()?;

        let mut res = TestClient::post("http://example.com/api/products")
            .json(&json!({ "name": "Nameless", "price": 10.0 }))
            .send(&make_service(app.clone()))
            .await;

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error, "Missing required fields");
        assert_eq!(app.products.list().await.len(), 3);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_zero_price_counts_as_missing() -> TestResult {
        let app = AppContext::empty();

        let res = TestClient::post("http://example.com/api/products")
            .json(&json!({
                "name": "Free Sample",
                "description": "Should be rejected",
                "price": 0,
                "category": "Misc",
            }))
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
