//! Per-task outcome.

use std::path::PathBuf;

use super::error::FetchError;
use crate::task::DownloadTask;

/// A file written by a successful task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    pub path: PathBuf,
    pub bytes: u64,
    /// Lower-case hex SHA-256 of the content.
    pub sha256: String,
}

/// Success or failure of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchStatus {
    Success,
    Failure,
}

/// Outcome of one [`DownloadTask`]; borrows the task it was produced for.
#[derive(Debug)]
pub struct FetchResult<'a> {
    pub task: &'a DownloadTask,
    pub outcome: Result<SavedFile, FetchError>,
}

impl<'a> FetchResult<'a> {
    pub fn success(task: &'a DownloadTask, saved: SavedFile) -> Self {
        Self {
            task,
            outcome: Ok(saved),
        }
    }

    pub fn failure(task: &'a DownloadTask, error: FetchError) -> Self {
        Self {
            task,
            outcome: Err(error),
        }
    }

    pub fn status(&self) -> FetchStatus {
        match self.outcome {
            Ok(_) => FetchStatus::Success,
            Err(_) => FetchStatus::Failure,
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Present iff the status is [`FetchStatus::Failure`].
    pub fn error(&self) -> Option<&FetchError> {
        self.outcome.as_ref().err()
    }

    pub fn saved(&self) -> Option<&SavedFile> {
        self.outcome.as_ref().ok()
    }
}
