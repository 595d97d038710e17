//! Download tasks and their planning from scraped links.

mod plan;

pub use plan::{load_links, RawLink, TaskPlanner};

use crate::naming::{sanitize_filename, sanitize_name, DEFAULT_EXTENSION};
use std::path::PathBuf;

/// One requested fetch: a URL and where to store it.
///
/// The destination folder and filename are sanitized on construction, so a
/// task never points outside `<output_dir>/<destination_folder>/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DownloadTask {
    url: String,
    destination_folder: String,
    filename: String,
}

impl DownloadTask {
    /// Builds a task; `filename` without an extension gets `.bin`.
    pub fn new(url: impl Into<String>, destination_folder: &str, filename: &str) -> Self {
        Self::with_default_extension(url, destination_folder, filename, DEFAULT_EXTENSION)
    }

    /// Builds a task, using `default_ext` when `filename` carries no extension.
    pub fn with_default_extension(
        url: impl Into<String>,
        destination_folder: &str,
        filename: &str,
        default_ext: &str,
    ) -> Self {
        Self {
            url: url.into(),
            destination_folder: sanitize_name(destination_folder),
            filename: sanitize_filename(filename, default_ext),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn destination_folder(&self) -> &str {
        &self.destination_folder
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// `destination_folder/filename`, relative to the batch output directory.
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(&self.destination_folder).join(&self.filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitizes_folder_and_filename() {
        let t = DownloadTask::new(
            "https://example.test/x",
            "Smith, John",
            "../../etc/Passwd Report.PDF",
        );
        assert_eq!(t.destination_folder(), "smith_john");
        assert_eq!(t.filename(), "_etc_passwd_report.pdf");
        assert_eq!(t.relative_path(), PathBuf::from("smith_john/_etc_passwd_report.pdf"));
    }

    #[test]
    fn already_clean_names_are_untouched() {
        let t = DownloadTask::new("https://example.test/a.pdf", "smith_john", "a.pdf");
        assert_eq!(t.url(), "https://example.test/a.pdf");
        assert_eq!(t.destination_folder(), "smith_john");
        assert_eq!(t.filename(), "a.pdf");
    }

    #[test]
    fn missing_extension_uses_default() {
        let t = DownloadTask::new("https://example.test/x", "f", "doc");
        assert_eq!(t.filename(), "doc.bin");
        let t = DownloadTask::with_default_extension("https://example.test/x", "f", "doc", "pdf");
        assert_eq!(t.filename(), "doc.pdf");
    }

    #[test]
    fn rebuilding_from_own_fields_is_stable() {
        let t = DownloadTask::new("https://example.test/x", "Ärzte & Co.", "Über uns.html");
        let again = DownloadTask::new(t.url(), t.destination_folder(), t.filename());
        assert_eq!(t, again);
    }
}
