//! Update Story Handler

use std::sync::Arc;

use curio_app::stories::StoryUpdate;
use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    errors::ApiError, extensions::*, state::State, stories::errors, stories::get::StoryResponse,
};

/// Update Story Request
///
/// Fields absent or empty keep their stored values.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateStoryRequest {
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

impl From<UpdateStoryRequest> for StoryUpdate {
    fn from(request: UpdateStoryRequest) -> Self {
        StoryUpdate {
            title: request.title,
            genre: request.genre,
            plot: request.plot,
            characters: request.characters,
            image: request.image,
        }
    }
}

/// Story Update Handler
#[endpoint(
    tags("stories"),
    summary = "Update Story",
    responses(
        (status_code = StatusCode::OK, description = "Story updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Story not found"),
    ),
)]
#[tracing::instrument(name = "stories.update", skip_all)]
pub(crate) async fn handler(
    id: PathParam<String>,
    json: JsonBody<UpdateStoryRequest>,
    depot: &mut Depot,
) -> Result<Json<StoryResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_record_id(errors::RESOURCE)?;

    let story = state
        .app
        .stories
        .update(id, json.into_inner().into())
        .await
        .map_err(errors::into_api_error)?;

    tracing::info!(id = %id, "updated story");

    Ok(Json(story.into()))
}
