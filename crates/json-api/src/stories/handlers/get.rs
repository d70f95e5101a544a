//! Get Story Handler

use std::sync::Arc;

use curio_app::stories::Story;
use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{errors::ApiError, extensions::*, state::State, stories::errors};

/// Story Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StoryResponse {
    /// The unique identifier of the story
    pub id: u64,

    /// The story title
    pub title: String,

    /// The genre, e.g. "Mystery"
    pub genre: String,

    /// The plot summary
    pub plot: String,

    /// The principal characters
    pub characters: String,

    /// The image URL
    pub image: String,

    /// The date and time the story was added
    #[serde(rename = "dateAdded")]
    pub date_added: String,
}

impl From<Story> for StoryResponse {
    fn from(story: Story) -> Self {
        StoryResponse {
            id: story.id.value(),
            title: story.title,
            genre: story.genre,
            plot: story.plot,
            characters: story.characters,
            image: story.image,
            date_added: story.date_added.to_string(),
        }
    }
}

/// Get Story Handler
///
/// Returns a story.
#[endpoint(
    tags("stories"),
    summary = "Get Story",
    responses(
        (status_code = StatusCode::OK, description = "Story found"),
        (status_code = StatusCode::NOT_FOUND, description = "Story not found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<StoryResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_record_id(errors::RESOURCE)?;

    let story = state
        .app
        .stories
        .get(id)
        .await
        .map_err(errors::into_api_error)?;

    Ok(Json(story.into()))
}
