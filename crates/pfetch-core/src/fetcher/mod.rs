//! Polite batch fetcher.
//!
//! Downloads a sequence of tasks strictly one at a time, in input order,
//! keeping at least `min_delay` between consecutive requests. Every failure
//! is caught at the task level and recorded in that task's result; the batch
//! always runs to the end.


use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

use crate::checksum;
use crate::config::PfetchConfig;
use crate::outcome::{is_success_status, FetchError, FetchResult, SavedFile};
use crate::session::FetchSession;
use crate::storage;
use crate::task::DownloadTask;
use crate::transport::{CurlTransport, Transport};

/// Runs batches of [`DownloadTask`]s against `output_dir`.
pub struct Fetcher<T: Transport> {
    transport: T,
    output_dir: PathBuf,
}

impl Fetcher<CurlTransport> {
    /// A fetcher using libcurl with timeouts and User-Agent from `cfg`.
    pub fn from_config(cfg: &PfetchConfig, output_dir: impl Into<PathBuf>) -> Self {
        Self::new(CurlTransport::from_config(cfg), output_dir)
    }
}

impl<T: Transport> Fetcher<T> {
    pub fn new(transport: T, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            transport,
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Downloads every task in order and returns one result per task,
    /// `result[i]` belonging to `tasks[i]`.
    ///
    /// Files land at `output_dir/destination_folder/filename`, replacing any
    /// existing file. Tasks with an invalid URL fail without a request and
    /// without consuming a politeness slot.
    pub fn fetch_all<'a>(
        &mut self,
        tasks: &'a [DownloadTask],
        min_delay: Duration,
    ) -> Vec<FetchResult<'a>> {
        let mut session = FetchSession::new(min_delay);
        tracing::info!(
            tasks = tasks.len(),
            min_delay_ms = session.min_delay().as_millis() as u64,
            output_dir = %self.output_dir.display(),
            "starting batch"
        );

        let results: Vec<FetchResult<'a>> = tasks
            .iter()
            .enumerate()
            .map(|(index, task)| {
                let result = match self.fetch_one(&mut session, task) {
                    Ok(saved) => FetchResult::success(task, saved),
                    Err(e) => FetchResult::failure(task, e),
                };
                log_result(index, &result);
                result
            })
            .collect();

        let succeeded = results.iter().filter(|r| r.is_success()).count();
        tracing::info!(
            succeeded,
            failed = results.len() - succeeded,
            "batch finished"
        );
        results
    }

    fn fetch_one(
        &mut self,
        session: &mut FetchSession,
        task: &DownloadTask,
    ) -> Result<SavedFile, FetchError> {
        let url = parse_task_url(task.url())?;

        session.wait_turn();

        let folder = task.destination_folder();
        let dir = storage::ensure_folder(&self.output_dir, folder)
            .map_err(|e| FetchError::storage(self.output_dir.join(folder), e))?;

        let response = self.transport.get(&url);
        session.mark_request();
        let response = response?;
        if !is_success_status(response.status) {
            return Err(FetchError::Http {
                status: response.status,
            });
        }

        let path = dir.join(task.filename());
        storage::write_file(&path, &response.body).map_err(|e| FetchError::storage(&path, e))?;

        Ok(SavedFile {
            bytes: response.body.len() as u64,
            sha256: checksum::sha256_bytes(&response.body),
            path,
        })
    }
}

fn log_result(index: usize, result: &FetchResult<'_>) {
    match &result.outcome {
        Ok(saved) => tracing::debug!(
            index,
            url = result.task.url(),
            path = %saved.path.display(),
            bytes = saved.bytes,
            "saved"
        ),
        Err(e) => tracing::warn!(
            index,
            url = result.task.url(),
            kind = ?e.kind(),
            "fetch failed: {}",
            e
        ),
    }
}

/// Accepts absolute `http`/`https` URLs with a host; anything else is an
/// [`FetchError::InvalidUrl`].
pub fn parse_task_url(raw: &str) -> Result<Url, FetchError> {
    let invalid = |reason: String| FetchError::InvalidUrl {
        url: raw.to_string(),
        reason,
    };
    let url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {:?}", url.scheme())));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid("missing host".to_string()));
    }
    Ok(url)
}
