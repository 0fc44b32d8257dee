//! The in-memory story collection and its mutation operations
//!
//! The library exclusively owns all story and chapter records; the UI layer
//! works with transient copies and commits edits back through these
//! operations. Story titles are the lookup key for append and edit, so they
//! are kept unique, as are chapter titles within one story.

use crate::store::model::{Chapter, Story};
use crate::store::storage::Storage;
use crate::{FiresideError, Result};
use log::{debug, info, warn};
use uuid::Uuid;

/// Ordered collection of stories
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Library {
    stories: Vec<Story>,
}

impl Library {
    /// An empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// A library over an existing collection
    pub fn from_stories(stories: Vec<Story>) -> Self {
        Self { stories }
    }

    /// Load the persisted collection
    pub fn load(storage: &dyn Storage) -> Result<Self> {
        let stories = storage.load()?.unwrap_or_default();
        debug!("Loaded {} stories", stories.len());
        Ok(Self { stories })
    }

    /// Load the persisted collection, falling back to empty
    ///
    /// A corrupt blob is logged and treated as no saved data; the failure
    /// never reaches the UI.
    pub fn load_or_default(storage: &dyn Storage) -> Self {
        match Self::load(storage) {
            Ok(library) => library,
            Err(e) => {
                warn!("Discarding saved stories: {}", e);
                Self::new()
            }
        }
    }

    /// Persist the full collection, overwriting prior state
    pub fn save(&self, storage: &dyn Storage) -> Result<()> {
        storage.save(&self.stories)
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stories.len()
    }

    /// Look up a story by exact title
    pub fn find_story(&self, title: &str) -> Option<&Story> {
        self.stories.iter().find(|s| s.title == title)
    }

    /// Append a chapter to the story with a matching title, creating the
    /// story if it does not exist yet
    ///
    /// Duplicate chapter titles within one story are rejected so that
    /// edit-by-title always resolves unambiguously.
    pub fn append_or_create_chapter(
        &mut self,
        story_title: &str,
        chapter_title: &str,
        paragraphs: Vec<String>,
    ) -> Result<()> {
        if story_title.is_empty() || chapter_title.is_empty() {
            return Err(FiresideError::InvalidInput("titles must not be empty".into()));
        }
        if paragraphs.is_empty() {
            return Err(FiresideError::InvalidInput("chapter has no paragraphs".into()));
        }

        let chapter = Chapter::new(chapter_title, paragraphs);

        if let Some(story) = self.stories.iter_mut().find(|s| s.title == story_title) {
            if story.chapters.iter().any(|c| c.title == chapter_title) {
                return Err(FiresideError::DuplicateChapter(chapter_title.to_string()));
            }
            debug!("Appending chapter \"{}\" to \"{}\"", chapter_title, story_title);
            story.chapters.push(chapter);
        } else {
            info!("Creating story \"{}\"", story_title);
            self.stories.push(Story::new(story_title, vec![chapter]));
        }

        Ok(())
    }

    /// Replace a chapter's title and paragraphs, found by story and chapter
    /// title
    ///
    /// A lookup miss leaves the collection unchanged and reports which key
    /// was not found.
    pub fn replace_chapter(
        &mut self,
        story_title: &str,
        chapter_title: &str,
        new_title: &str,
        new_paragraphs: Vec<String>,
    ) -> Result<()> {
        if new_title.is_empty() {
            return Err(FiresideError::InvalidInput("titles must not be empty".into()));
        }
        if new_paragraphs.is_empty() {
            return Err(FiresideError::InvalidInput("chapter has no paragraphs".into()));
        }

        let story = self
            .stories
            .iter_mut()
            .find(|s| s.title == story_title)
            .ok_or_else(|| FiresideError::StoryNotFound(story_title.to_string()))?;

        // Renaming onto another chapter's title would make it ambiguous
        if new_title != chapter_title && story.chapters.iter().any(|c| c.title == new_title) {
            return Err(FiresideError::DuplicateChapter(new_title.to_string()));
        }

        let chapter = story
            .chapters
            .iter_mut()
            .find(|c| c.title == chapter_title)
            .ok_or_else(|| FiresideError::ChapterNotFound(chapter_title.to_string()))?;

        debug!("Replacing chapter \"{}\" in \"{}\"", chapter_title, story_title);
        chapter.title = new_title.to_string();
        chapter.paragraphs = new_paragraphs;

        Ok(())
    }

    /// Remove the story at a position, returning it
    pub fn delete_story(&mut self, index: usize) -> Result<Story> {
        if index >= self.stories.len() {
            return Err(FiresideError::IndexOutOfBounds(index));
        }

        let story = self.stories.remove(index);
        info!("Deleted story \"{}\"", story.title);
        Ok(story)
    }

    /// Remove a chapter at a position within the story with the given id
    pub fn delete_chapter(&mut self, story_id: Uuid, chapter_index: usize) -> Result<Chapter> {
        let story = self
            .stories
            .iter_mut()
            .find(|s| s.id == story_id)
            .ok_or_else(|| FiresideError::StoryNotFound(story_id.to_string()))?;

        if chapter_index >= story.chapters.len() {
            return Err(FiresideError::IndexOutOfBounds(chapter_index));
        }

        let chapter = story.chapters.remove(chapter_index);
        debug!("Deleted chapter \"{}\" from \"{}\"", chapter.title, story.title);
        Ok(chapter)
    }
}
