//! CLI command handlers, one per file.

mod fetch;
mod retry;
mod sanitize;
mod status;

pub use fetch::{run_fetch, FetchArgs};
pub use retry::run_retry;
pub use sanitize::run_sanitize;
pub use status::run_status;

use pfetch_core::config::PfetchConfig;

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub delay: Option<f64>,
    pub timeout: Option<u64>,
}

impl Overrides {
    fn apply(&self, cfg: &PfetchConfig) -> PfetchConfig {
        let mut cfg = cfg.clone();
        if let Some(delay) = self.delay {
            cfg.min_delay_secs = delay;
        }
        if let Some(timeout) = self.timeout {
            cfg.request_timeout_secs = timeout;
        }
        cfg
    }
}
