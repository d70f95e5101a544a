//! Story Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{errors::ApiError, extensions::*, state::State, stories::get::StoryResponse};

/// Story Index Handler
///
/// Returns all stories in insertion order, as a bare JSON array.
#[endpoint(tags("stories"), summary = "List Stories")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<StoryResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let stories = state.app.stories.list().await;

    Ok(Json(stories.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use curio_app::context::AppContext;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::catalog_service;

    use super::*;

    fn make_service(app: AppContext) -> Service {
        catalog_service(app, Router::with_path("api/stories").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_seeds_in_insertion_order() -> TestResult {
        let app = AppContext::seeded()?;

        let response: Vec<StoryResponse> = TestClient::get("http://example.com/api/stories")
            .send(&make_service(app))
            .await
            .take_json()
            .await?;

        let ids: Vec<u64> = response.iter().map(|story| story.id).collect();

        assert_eq!(ids, vec![1, 2, 3]);

        Ok(())
    }
}
