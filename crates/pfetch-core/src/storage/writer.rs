//! Sequential writer for a temp download file.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Writer for a `.part` temp file that is renamed into place on success.
pub struct StorageWriter {
    file: File,
    temp_path: PathBuf,
}

impl StorageWriter {
    /// Create the temp file, truncating a leftover from an earlier run.
    pub fn create(temp_path: &Path) -> io::Result<Self> {
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(temp_path)?;
        Ok(Self {
            file,
            temp_path: temp_path.to_path_buf(),
        })
    }

    pub fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        self.file.write_all(data)
    }

    /// Sync file data to disk. Call before `finalize` for durability.
    pub fn sync(&self) -> io::Result<()> {
        self.file.sync_all()
    }

    /// Rename the temp file over `final_path`, replacing any existing file.
    /// Consumes the writer and closes the file first.
    pub fn finalize(self, final_path: &Path) -> io::Result<()> {
        let temp_path = self.temp_path;
        drop(self.file);
        std::fs::rename(&temp_path, final_path)
    }

    /// Close and remove the temp file; errors are logged, not returned.
    pub fn discard(self) {
        let temp_path = self.temp_path;
        drop(self.file);
        if let Err(e) = std::fs::remove_file(&temp_path) {
            tracing::debug!(path = %temp_path.display(), "could not remove temp file: {}", e);
        }
    }
}
