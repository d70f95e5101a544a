//! Story models.

use jiff::Timestamp;

use crate::catalog::{CatalogError, CatalogRecord, RecordId, merge_field};

/// Image shown when a story is created without one.
pub const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?w=300&h=300&fit=crop";

/// Story Model
#[derive(Debug, Clone, PartialEq)]
pub struct Story {
    /// Repository-assigned identifier.
    pub id: RecordId,
    /// Story title.
    pub title: String,
    /// Genre, e.g. `"Mystery"`.
    pub genre: String,
    /// Plot summary.
    pub plot: String,
    /// Principal characters, free-form text.
    pub characters: String,
    /// Image URL.
    pub image: String,
    /// Stamped once at creation, immutable thereafter.
    pub date_added: Timestamp,
}

/// New Story Model
///
/// Stories enforce no required fields; absent fields are stored as
/// empty strings and the image falls back to [`PLACEHOLDER_IMAGE`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewStory {
    /// Story title.
    pub title: String,
    /// Genre.
    pub genre: String,
    /// Plot summary.
    pub plot: String,
    /// Principal characters.
    pub characters: String,
    /// Image URL (optional).
    pub image: Option<String>,
}

/// Story Update Model
///
/// Fields absent or empty keep their stored values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoryUpdate {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement genre.
    pub genre: Option<String>,
    /// Replacement plot summary.
    pub plot: Option<String>,
    /// Replacement characters.
    pub characters: Option<String>,
    /// Replacement image URL.
    pub image: Option<String>,
}

impl CatalogRecord for Story {
    type Draft = NewStory;
    type Patch = StoryUpdate;

    const RESOURCE: &'static str = "Story";

    fn validate(_draft: &Self::Draft) -> Result<(), CatalogError> {
        // Stories accept whatever the caller supplies.
        Ok(())
    }

    fn from_draft(id: RecordId, created_at: Timestamp, draft: Self::Draft) -> Self {
        Self {
            id,
            title: draft.title,
            genre: draft.genre,
            plot: draft.plot,
            characters: draft.characters,
            image: draft
                .image
                .filter(|image| !image.is_empty())
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            date_added: created_at,
        }
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn apply(&mut self, patch: Self::Patch) {
        merge_field(&mut self.title, patch.title);
        merge_field(&mut self.genre, patch.genre);
        merge_field(&mut self.plot, patch.plot);
        merge_field(&mut self.characters, patch.characters);
        merge_field(&mut self.image, patch.image);
    }

    fn matches(&self, needle: &str) -> bool {
        [&self.title, &self.genre, &self.plot, &self.characters]
            .into_iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Story {
        Story::from_draft(
            RecordId::new(1),
            Timestamp::UNIX_EPOCH,
            NewStory {
                title: "The Lighthouse Keeper's Secret".to_string(),
                genre: "Mystery".to_string(),
                plot: "A keeper guards more than the light".to_string(),
                characters: "Eleanor Voss, Captain Marsh".to_string(),
                image: None,
            },
        )
    }

    #[test]
    fn test_validate_accepts_empty_draft() {
        assert_eq!(Story::validate(&NewStory::default()), Ok(()));
    }

    #[test]
    fn test_empty_draft_defaults_to_empty_fields_and_placeholder() {
        let story = Story::from_draft(
            RecordId::new(1),
            Timestamp::UNIX_EPOCH,
            NewStory::default(),
        );

        assert!(story.title.is_empty());
        assert_eq!(story.image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_matches_searches_all_four_fields() {
        let story = sample();

        assert!(story.matches("lighthouse"));
        assert!(story.matches("mystery"));
        assert!(story.matches("guards"));
        assert!(story.matches("marsh"));
        assert!(!story.matches("romance"));
    }

    #[test]
    fn test_apply_merges_non_empty_fields_only() {
        let mut story = sample();

        story.apply(StoryUpdate {
            title: Some(String::new()),
            genre: Some("Thriller".to_string()),
            plot: None,
            characters: None,
            image: None,
        });

        assert_eq!(story.title, "The Lighthouse Keeper's Secret");
        assert_eq!(story.genre, "Thriller");
    }
}
