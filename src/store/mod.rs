//! Story storage system

pub mod library;
pub mod model;
pub mod storage;

pub use library::Library;
pub use model::{seed_stories, split_paragraphs, Chapter, Story};
pub use storage::{FileStorage, Storage};
