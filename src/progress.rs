//! Viewed-training tracking behind the "Completed" badge.
//!
//! Ids are appended once and never reordered. The list is stored as JSON
//! under a single key, `{"viewedTrainings": [...]}`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage key the id list lives under.
pub const STORAGE_KEY: &str = "viewedTrainings";

#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to serialize viewed trainings: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredProgress {
    #[serde(rename = "viewedTrainings", default)]
    viewed_trainings: Vec<String>,
}

/// Append-only set of viewed course ids, optionally backed by a file.
#[derive(Debug, Default)]
pub struct ViewedTrainings {
    ids: Vec<String>,
    path: Option<PathBuf>,
}

impl ViewedTrainings {
    /// Tracker that is never persisted.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Read the stored list. A missing or unreadable file starts empty.
    pub fn load(path: &Path) -> Self {
        let ids = match std::fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str::<StoredProgress>(&text) {
                Ok(stored) => stored.viewed_trainings,
                Err(e) => {
                    log::warn!("Ignoring corrupt viewed trainings at {}: {e}", path.display());
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                log::warn!("Error reading viewed trainings at {}: {e}", path.display());
                Vec::new()
            }
        };
        ViewedTrainings {
            ids,
            path: Some(path.to_path_buf()),
        }
    }

    pub fn has_viewed(&self, course_id: &str) -> bool {
        self.ids.iter().any(|id| id == course_id)
    }

    pub fn viewed(&self) -> &[String] {
        &self.ids
    }

    /// Record a view. Returns `true` if the id was new.
    pub fn mark_viewed(&mut self, course_id: &str) -> Result<bool, ProgressError> {
        if self.has_viewed(course_id) {
            return Ok(false);
        }
        self.ids.push(course_id.to_string());
        if let Err(e) = self.save() {
            // Memory only holds ids that reached the file.
            self.ids.pop();
            return Err(e);
        }
        Ok(true)
    }

    /// Forget every recorded view.
    pub fn clear(&mut self) -> Result<(), ProgressError> {
        self.ids.clear();
        match &self.path {
            Some(path) if path.exists() => {
                std::fs::remove_file(path).map_err(|source| ProgressError::Write {
                    path: path.clone(),
                    source,
                })
            }
            _ => Ok(()),
        }
    }

    fn save(&self) -> Result<(), ProgressError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ProgressError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let stored = StoredProgress {
            viewed_trainings: self.ids.clone(),
        };
        let json = serde_json::to_string(&stored)?;
        std::fs::write(path, json).map_err(|source| ProgressError::Write {
            path: path.clone(),
            source,
        })
    }
}
