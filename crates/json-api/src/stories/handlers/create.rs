//! Create Story Handler

use std::sync::Arc;

use curio_app::stories::NewStory;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    errors::ApiError, extensions::*, state::State, stories::errors, stories::get::StoryResponse,
};

/// Create Story Request
///
/// Stories enforce no required fields; absent fields are stored as
/// empty strings.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateStoryRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub plot: Option<String>,
    #[serde(default)]
    pub characters: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl From<CreateStoryRequest> for NewStory {
    fn from(request: CreateStoryRequest) -> Self {
        NewStory {
            title: request.title.unwrap_or_default(),
            genre: request.genre.unwrap_or_default(),
            plot: request.plot.unwrap_or_default(),
            characters: request.characters.unwrap_or_default(),
            image: request.image,
        }
    }
}

/// Create Story Handler
#[endpoint(
    tags("stories"),
    summary = "Create Story",
    responses(
        (status_code = StatusCode::CREATED, description = "Story created"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateStoryRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<StoryResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let story = state
        .app
        .stories
        .create(json.into_inner().into())
        .await
        .map_err(errors::into_api_error)?;

    res.add_header(LOCATION, format!("/api/stories/{}", story.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(id = %story.id, "created story");

    Ok(Json(story.into()))
}
