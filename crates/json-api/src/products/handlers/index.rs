//! Product Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{errors::ApiError, extensions::*, products::get::ProductResponse, state::State};

/// Product Index Handler
///
/// Returns all products in insertion order, as a bare JSON array.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state.app.products.list().await;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use curio_app::context::AppContext;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::catalog_service;

    use super::*;

    fn make_service(app: AppContext) -> Service {
        catalog_service(app, Router::with_path("api/products").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_empty_array() -> TestResult {
        let response: Vec<ProductResponse> = TestClient::get("http://example.com/api/products")
            .send(&make_service(AppContext::empty()))
            .await
            .take_json()
            .await?;

        assert!(response.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_index_returns_seeds_in_insertion_order() -> TestResult {
        let app = AppContext::seeded()?;

        let response: Vec<ProductResponse> = TestClient::get("http://example.com/api/products")
            .send(&make_service(app))
            .await
            .take_json()
            .await?;

        let ids: Vec<u64> = response.iter().map(|product| product.id).collect();

        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(response[0].category, "Ceramics");

        Ok(())
    }
}
