use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Global configuration loaded from `~/.config/pfetch/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PfetchConfig {
    /// Minimum spacing between consecutive requests, in seconds.
    pub min_delay_secs: f64,
    /// Total time allowed for one request (connect + transfer).
    pub request_timeout_secs: u64,
    /// Time allowed to establish the connection.
    pub connect_timeout_secs: u64,
    /// User-Agent sent with every request.
    pub user_agent: String,
    /// Follow HTTP redirects (up to 10).
    #[serde(default = "default_follow_redirects")]
    pub follow_redirects: bool,
    /// Extension used when a link's URL path has none.
    #[serde(default = "default_extension")]
    pub default_extension: String,
    /// Base output directory; the current directory when unset.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

fn default_follow_redirects() -> bool {
    true
}

fn default_extension() -> String {
    "pdf".to_string()
}

impl Default for PfetchConfig {
    fn default() -> Self {
        Self {
            min_delay_secs: 5.0,
            request_timeout_secs: 60,
            connect_timeout_secs: 15,
            user_agent: concat!("pfetch/", env!("CARGO_PKG_VERSION")).to_string(),
            follow_redirects: default_follow_redirects(),
            default_extension: default_extension(),
            output_dir: None,
        }
    }
}

impl PfetchConfig {
    /// The politeness delay; rejects negative or non-finite values.
    pub fn min_delay(&self) -> Result<Duration> {
        delay_from_secs(self.min_delay_secs)
    }

    /// Checks the values curl and the fetcher rely on. A zero timeout would
    /// mean "wait forever" to curl, so both timeouts must be at least 1s.
    pub fn validate(&self) -> Result<()> {
        self.min_delay()?;
        if self.request_timeout_secs == 0 {
            bail!("request_timeout_secs must be at least 1");
        }
        if self.connect_timeout_secs == 0 {
            bail!("connect_timeout_secs must be at least 1");
        }
        Ok(())
    }
}

/// Converts a seconds value from config or CLI into a delay.
pub fn delay_from_secs(secs: f64) -> Result<Duration> {
    Duration::try_from_secs_f64(secs)
        .with_context(|| format!("invalid delay {secs}: must be a finite number >= 0"))
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PfetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PfetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: PfetchConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
