//! Delete Story Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{errors::ApiError, extensions::*, state::State, stories::errors};

/// Delete Story Handler
#[endpoint(
    tags("stories"),
    summary = "Delete Story",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Story deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Story not found"),
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
        .stories
        .delete(id)
        .await
        .map_err(errors::into_api_error)?;

    tracing::info!(id = %id, "deleted story");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use curio_app::context::AppContext;
    use salvo::test::TestClient;
    use testresult::TestResult;

    use crate::test_helpers::catalog_service;

    use super::*;

    fn make_service(app: AppContext) -> Service {
        catalog_service(app, Router::with_path("api/stories/{id}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_returns_204_and_removes_record() -> TestResult {
        let app = AppContext::seeded()?;

        let res = TestClient::delete("http://example.com/api/stories/3")
            .send(&make_service(app.clone()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));
        assert_eq!(app.stories.list().await.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_story_returns_404() -> TestResult {
        let app = AppContext::empty();

        let res = TestClient::delete("http://example.com/api/stories/1")
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
