//! Naming: sanitized folder names and filenames, URL filename hints and
//! relative link resolution.
//!
//! Everything here is pure; no I/O.

mod path;
mod resolve;
mod sanitize;

pub use path::filename_from_url_path;
pub use resolve::resolve_link;
pub use sanitize::{
    sanitize_filename, sanitize_name, sanitize_name_with_limit, DEFAULT_EXTENSION, FALLBACK_NAME,
    NAME_MAX_LEN,
};
