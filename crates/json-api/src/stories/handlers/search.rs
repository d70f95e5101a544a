//! Story Search Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{errors::ApiError, extensions::*, state::State, stories::get::StoryResponse};

/// Story Search Handler
///
/// Case-insensitive substring match over title, genre, plot, and
/// characters. An absent or empty `q` returns the full catalog.
#[endpoint(tags("stories"), summary = "Search Stories")]
pub(crate) async fn handler(
    q: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<StoryResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let query = q.into_inner().unwrap_or_default();

    let stories = state.app.stories.search(&query).await;

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
        catalog_service(app, Router::with_path("api/search").get(handler))
    }

    #[tokio::test]
    async fn test_search_matches_characters_field() -> TestResult {
        let app = AppContext::seeded()?;

        let response: Vec<StoryResponse> =
            TestClient::get("http://example.com/api/search?q=MARSH")
                .send(&make_service(app))
                .await
                .take_json()
                .await?;

        assert_eq!(response.len(), 1);
        assert_eq!(response[0].title, "The Lighthouse Keeper's Secret");

        Ok(())
    }

    #[tokio::test]
    async fn test_search_matches_genre_and_plot() -> TestResult {
        let app = AppContext::seeded()?;
        let service = make_service(app);

        let by_genre: Vec<StoryResponse> =
            TestClient::get("http://example.com/api/search?q=fantasy")
                .send(&service)
                .await
                .take_json()
                .await?;

        assert_eq!(by_genre.len(), 1);
        assert_eq!(by_genre[0].title, "Embers of the Fallen Sky");

        let by_plot: Vec<StoryResponse> =
            TestClient::get("http://example.com/api/search?q=drowning")
                .send(&service)
                .await
                .take_json()
                .await?;

        assert_eq!(by_plot.len(), 1);
        assert_eq!(by_plot[0].title, "Last Train to Meridian");

        Ok(())
    }

    #[tokio::test]
    async fn test_search_empty_query_lists_everything() -> TestResult {
        let app = AppContext::seeded()?;

        let response: Vec<StoryResponse> = TestClient::get("http://example.com/api/search?q=")
            .send(&make_service(app))
            .await
            .take_json()
            .await?;

        assert_eq!(response.len(), 3);

        Ok(())
    }
}
