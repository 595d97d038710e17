//! Outcome of download tasks: results, the failure taxonomy, and
//! classification of transport errors.

mod classify;
mod error;
mod result;

pub use classify::{classify_curl_error, is_success_status};
pub use error::{FetchError, FetchErrorKind, TransportError};
pub use result::{FetchResult, FetchStatus, SavedFile};
