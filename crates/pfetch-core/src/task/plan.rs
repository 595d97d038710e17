//! Turning scraped `(name, url)` links into download tasks.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use url::Url;

use super::DownloadTask;
use crate::naming::{filename_from_url_path, resolve_link, FALLBACK_NAME};

/// A link as produced by an HTML table scraper: human text plus an href.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLink {
    pub name: String,
    pub url: String,
}

/// Reads a JSON array of `{"name": ..., "url": ...}` objects.
pub fn load_links(path: &Path) -> Result<Vec<RawLink>> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read links file {}", path.display()))?;
    let links: Vec<RawLink> = serde_json::from_str(&data)
        .with_context(|| format!("parse links file {}", path.display()))?;
    Ok(links)
}

/// Builds one [`DownloadTask`] per scraped link.
///
/// The folder comes from the link's name, the filename from the last segment
/// of the resolved URL. A document linked under several names is therefore
/// saved once per folder.
#[derive(Debug, Clone)]
pub struct TaskPlanner {
    base_url: Option<Url>,
    default_extension: String,
}

impl TaskPlanner {
    pub fn new(base_url: Option<Url>, default_extension: impl Into<String>) -> Self {
        Self {
            base_url,
            default_extension: default_extension.into(),
        }
    }

    /// Plans tasks in input order.
    pub fn plan(&self, links: &[RawLink]) -> Vec<DownloadTask> {
        links.iter().map(|link| self.plan_one(link)).collect()
    }

    fn plan_one(&self, link: &RawLink) -> DownloadTask {
        let url = resolve_link(self.base_url.as_ref(), &link.url);
        let filename =
            filename_from_url_path(&url).unwrap_or_else(|| FALLBACK_NAME.to_string());
        DownloadTask::with_default_extension(url, &link.name, &filename, &self.default_extension)
    }
}
