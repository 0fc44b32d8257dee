//! Persistence for the story collection
//!
//! The whole collection is serialized as one JSON blob under a single named
//! slot. Saves always rewrite the full blob; there is no incremental update,
//! no versioning and no migration logic.

use crate::store::model::Story;
use crate::{FiresideError, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Backend holding the serialized story collection
///
/// Load distinguishes "nothing saved yet" (`Ok(None)`) from a corrupt or
/// unreadable blob (`Err`), so callers can decide whether to log or surface
/// the failure.
pub trait Storage {
    /// Read and deserialize the saved collection, if any
    fn load(&self) -> Result<Option<Vec<Story>>>;

    /// Serialize and persist the full collection, overwriting prior state
    fn save(&self, stories: &[Story]) -> Result<()>;
}

/// File-backed storage: one JSON file acting as the key-value slot
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Storage rooted at an explicit file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at the platform data directory (e.g. ~/.local/share/fireside)
    pub fn default_location() -> Self {
        let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join(crate::APP_NAME).join("stories.json"))
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for FileStorage {
    fn load(&self) -> Result<Option<Vec<Story>>> {
        if !self.path.exists() {
            debug!("No story file at {:?}", self.path);
            return Ok(None);
        }

        let bytes = fs::read(&self.path)
            .map_err(|e| FiresideError::Storage(format!("Failed to read {:?}: {}", self.path, e)))?;
        let stories = serde_json::from_slice(&bytes)
            .map_err(|e| FiresideError::Storage(format!("Corrupt story file {:?}: {}", self.path, e)))?;

        Ok(Some(stories))
    }

    fn save(&self, stories: &[Story]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        debug!("Saving {} stories to {:?}", stories.len(), self.path);
        let json = serde_json::to_vec_pretty(stories)?;
        fs::write(&self.path, json)?;

        Ok(())
    }
}
