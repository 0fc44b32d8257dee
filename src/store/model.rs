//! Story and chapter records
//!
//! A story is a titled, ordered collection of chapters; a chapter is a titled,
//! ordered list of paragraph strings. The serialized form uses the field name
//! `contents` for a story's chapters, matching the persisted schema.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A titled ordered list of paragraphs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: Uuid,
    pub title: String,
    pub paragraphs: Vec<String>,
}

impl Chapter {
    /// Create a chapter with a fresh identifier
    pub fn new(title: impl Into<String>, paragraphs: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            paragraphs,
        }
    }

    /// Create a chapter from free-form multi-line editor input
    ///
    /// Blank and whitespace-only lines are dropped.
    pub fn from_text(title: impl Into<String>, text: &str) -> Self {
        Self::new(title, split_paragraphs(text))
    }
}

/// A titled collection of ordered chapters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "contents")]
    pub chapters: Vec<Chapter>,
}

impl Story {
    /// Create a story with a fresh identifier
    pub fn new(title: impl Into<String>, chapters: Vec<Chapter>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            chapters,
        }
    }
}

/// Split free-form editor input into paragraphs
///
/// Lines are trimmed; blank and whitespace-only lines are dropped.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// The built-in starter story shipped with the app
///
/// Used to populate the library the first time it runs with no saved data.
pub fn seed_stories() -> Vec<Story> {
    vec![Story::new(
        "小红帽",
        vec![
            Chapter::new(
                "第一章：进入森林",
                vec![
                    "从前，有一个可爱的小女孩，她总是戴着奶奶送给她的红色帽子。".to_string(),
                    "有一天，妈妈让她去给生病的奶奶送食物。".to_string(),
                    "小红帽踏上了穿过森林的旅程。".to_string(),
                ],
            ),
            Chapter::new(
                "第二章：遇见大灰狼",
                vec![
                    "在森林里，小红帽遇到了狡猾的大灰狼。".to_string(),
                    "大灰狼假装友好，询问她要去哪里。".to_string(),
                ],
            ),
        ],
    )]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_paragraphs_drops_blank_lines() {
        assert_eq!(split_paragraphs("a\n\nb\n "), vec!["a", "b"]);
    }

    #[test]
    fn test_split_paragraphs_trims_whitespace() {
        assert_eq!(split_paragraphs("  hello  \n\tworld\t"), vec!["hello", "world"]);
    }

    #[test]
    fn test_split_paragraphs_empty_input() {
        assert!(split_paragraphs("").is_empty());
        assert!(split_paragraphs("\n \n\t\n").is_empty());
    }

    #[test]
    fn test_split_paragraphs_preserves_order() {
        assert_eq!(split_paragraphs("one\ntwo\nthree"), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_chapter_from_text() {
        let chapter = Chapter::from_text("C1", "a\n\nb\n ");
        assert_eq!(chapter.title, "C1");
        assert_eq!(chapter.paragraphs, vec!["a", "b"]);
    }

    #[test]
    fn test_fresh_identifiers() {
        let a = Chapter::new("same", vec![]);
        let b = Chapter::new("same", vec![]);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_seed_stories() {
        let stories = seed_stories();
        assert_eq!(stories.len(), 1);
        assert_eq!(stories[0].chapters.len(), 2);
        assert!(stories[0].chapters.iter().all(|c| !c.paragraphs.is_empty()));
    }
}
