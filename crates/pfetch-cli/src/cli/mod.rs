//! CLI for the pfetch polite batch downloader.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pfetch_core::config;
use std::path::PathBuf;

use commands::{run_fetch, run_retry, run_sanitize, run_status, FetchArgs, Overrides};

/// Top-level CLI for pfetch.
#[derive(Debug, Parser)]
#[command(name = "pfetch")]
#[command(about = "pfetch: polite, sequential batch downloader", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download every link of a links file, one at a time, and write a report.
    Fetch {
        /// JSON array of {"name": ..., "url": ...} objects.
        links: PathBuf,
        /// Page the links were scraped from; relative links are resolved against it.
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
        /// Output directory (default: config `output_dir`, else current directory).
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
        /// Minimum seconds between two requests (default: config `min_delay_secs`).
        #[arg(long, value_name = "SECS")]
        delay: Option<f64>,
        /// Per-request timeout in seconds, at least 1 (default: config `request_timeout_secs`).
        #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
        timeout: Option<u64>,
        /// Where to write the JSON report (default: <out>/pfetch-report.json).
        #[arg(long, value_name = "PATH")]
        report: Option<PathBuf>,
    },

    /// Re-run only the failed entries of a report and update it in place.
    Retry {
        /// Report written by `pfetch fetch`.
        report: PathBuf,
        /// Minimum seconds between two requests (default: the report's delay).
        #[arg(long, value_name = "SECS")]
        delay: Option<f64>,
        /// Per-request timeout in seconds, at least 1 (default: config `request_timeout_secs`).
        #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
        timeout: Option<u64>,
    },

    /// Show the entries of a report.
    Status {
        /// Report written by `pfetch fetch` or `pfetch retry`.
        report: PathBuf,
        /// Re-hash saved files and compare with the recorded SHA-256.
        #[arg(long)]
        verify: bool,
    },

    /// Print the sanitized folder name for each argument.
    Sanitize {
        #[arg(required = true)]
        names: Vec<String>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Fetch {
                links,
                base_url,
                out,
                delay,
                timeout,
                report,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                let args = FetchArgs {
                    links,
                    base_url,
                    out,
                    report,
                };
                run_fetch(&cfg, &args, Overrides { delay, timeout })?;
            }
            CliCommand::Retry {
                report,
                delay,
                timeout,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_retry(&cfg, &report, Overrides { delay, timeout })?;
            }
            CliCommand::Status { report, verify } => run_status(&report, verify)?,
            CliCommand::Sanitize { names } => run_sanitize(&names),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
