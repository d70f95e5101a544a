//! Story plots catalog schema.

pub mod models;

pub use models::{NewStory, Story, StoryUpdate};
