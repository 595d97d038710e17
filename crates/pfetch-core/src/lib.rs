pub mod config;
pub mod logging;

pub mod checksum;
pub mod fetcher;
pub mod naming;
pub mod outcome;
pub mod report;
pub mod session;
pub mod storage;
pub mod task;
pub mod transport;

pub use fetcher::Fetcher;
pub use outcome::{FetchError, FetchErrorKind, FetchResult, FetchStatus, SavedFile};
pub use report::BatchReport;
pub use task::DownloadTask;
