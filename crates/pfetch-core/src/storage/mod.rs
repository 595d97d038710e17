//! Disk side of a batch: destination folders and overwrite-on-success files.
//!
//! Bodies are written to a `.part` temp file next to the target, synced, then
//! renamed over the target, so a failed write never leaves a truncated or
//! empty file at the final path.

mod writer;

pub use writer::StorageWriter;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before the rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `a.pdf` → `a.pdf.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Creates `output_dir/folder` if absent and returns it. Idempotent.
pub fn ensure_folder(output_dir: &Path, folder: &str) -> io::Result<PathBuf> {
    let dir = output_dir.join(folder);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Anchors `dir` to the current directory when it is relative, so the paths
/// recorded in a report stay valid from wherever the report is used later.
pub fn absolute_dir(dir: &Path) -> io::Result<PathBuf> {
    std::path::absolute(dir)
}

/// Writes `data` to `final_path`, replacing any existing file.
pub fn write_file(final_path: &Path, data: &[u8]) -> io::Result<()> {
    let mut writer = StorageWriter::create(&temp_path(final_path))?;
    let written = writer.write_all(data).and_then(|()| writer.sync());
    match written {
        Ok(()) => writer.finalize(final_path),
        Err(e) => {
            writer.discard();
            Err(e)
        }
    }
}
