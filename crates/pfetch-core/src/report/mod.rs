//! Batch report: the ordered, serializable record of one batch.
//!
//! A report is written as JSON after every batch. Its Failure entries drive
//! a retry pass, whose own report is merged back in place.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::outcome::{FetchErrorKind, FetchResult, FetchStatus};
use crate::task::DownloadTask;

/// Default report filename inside the output directory.
pub const DEFAULT_REPORT_NAME: &str = "pfetch-report.json";

/// One line of the report, mirroring one task and its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub url: String,
    pub destination_folder: String,
    pub filename: String,
    pub status: FetchStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<FetchErrorKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bytes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
}

impl ReportEntry {
    pub fn from_result(result: &FetchResult<'_>) -> Self {
        let task = result.task;
        let mut entry = Self {
            url: task.url().to_string(),
            destination_folder: task.destination_folder().to_string(),
            filename: task.filename().to_string(),
            status: result.status(),
            error_kind: None,
            error: None,
            path: None,
            bytes: None,
            sha256: None,
        };
        match &result.outcome {
            Ok(saved) => {
                entry.path = Some(saved.path.clone());
                entry.bytes = Some(saved.bytes);
                entry.sha256 = Some(saved.sha256.clone());
            }
            Err(e) => {
                entry.error_kind = Some(e.kind());
                entry.error = Some(e.to_string());
            }
        }
        entry
    }

    pub fn is_failure(&self) -> bool {
        self.status == FetchStatus::Failure
    }

    /// Rebuilds the task this entry was recorded for.
    pub fn to_task(&self) -> DownloadTask {
        DownloadTask::new(self.url.clone(), &self.destination_folder, &self.filename)
    }

    fn same_task(&self, other: &ReportEntry) -> bool {
        self.url == other.url
            && self.destination_folder == other.destination_folder
            && self.filename == other.filename
    }
}

/// Ordered report of one batch (or of a batch merged with its retry passes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub output_dir: PathBuf,
    pub min_delay_secs: f64,
    pub entries: Vec<ReportEntry>,
}

impl BatchReport {
    pub fn from_results(output_dir: &Path, min_delay: Duration, results: &[FetchResult<'_>]) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
            min_delay_secs: min_delay.as_secs_f64(),
            entries: results.iter().map(ReportEntry::from_result).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn succeeded(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_failure()).count()
    }

    pub fn failed(&self) -> usize {
        self.entries.iter().filter(|e| e.is_failure()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|e| e.is_failure())
    }

    /// Tasks of the Failure entries, in report order.
    pub fn retry_tasks(&self) -> Vec<DownloadTask> {
        self.failures().map(ReportEntry::to_task).collect()
    }

    /// Replaces each Failure entry with the outcome of the same task in
    /// `retry`. Successful entries and order are left untouched. Returns the
    /// number of entries that turned into successes.
    pub fn merge_retry(&mut self, retry: &BatchReport) -> usize {
        let mut recovered = 0;
        for entry in self.entries.iter_mut().filter(|e| e.is_failure()) {
            if let Some(newer) = retry.entries.iter().find(|r| r.same_task(entry)) {
                if !newer.is_failure() {
                    recovered += 1;
                }
                *entry = newer.clone();
            }
        }
        recovered
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("create report directory {}", parent.display()))?;
        }
        fs::write(path, json).with_context(|| format!("write report {}", path.display()))?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data =
            fs::read_to_string(path).with_context(|| format!("read report {}", path.display()))?;
        let report = serde_json::from_str(&data)
            .with_context(|| format!("parse report {}", path.display()))?;
        Ok(report)
    }
}
