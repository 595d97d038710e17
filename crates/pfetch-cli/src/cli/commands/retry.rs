//! `pfetch retry <report>` – re-run the failed entries of a report.

use anyhow::{bail, Result};
use pfetch_core::config::{self, PfetchConfig};
use pfetch_core::report::BatchReport;
use pfetch_core::Fetcher;
use std::path::Path;
use std::time::Duration;

use super::Overrides;

pub fn run_retry(cfg: &PfetchConfig, report_path: &Path, overrides: Overrides) -> Result<()> {
    let mut report = BatchReport::load(report_path)?;
    let tasks = report.retry_tasks();
    if tasks.is_empty() {
        println!("Nothing to retry: all {} entries succeeded.", report.len());
        return Ok(());
    }
    if !report.output_dir.is_absolute() {
        bail!(
            "report {} has a relative output directory {}; re-run `pfetch fetch` to retry",
            report_path.display(),
            report.output_dir.display()
        );
    }

    let cfg = overrides.apply(cfg);
    cfg.validate()?;
    let min_delay = retry_delay(&report, overrides)?;

    let mut fetcher = Fetcher::from_config(&cfg, &report.output_dir);
    let results = fetcher.fetch_all(&tasks, min_delay);
    let retry = BatchReport::from_results(fetcher.output_dir(), min_delay, &results);

    let recovered = report.merge_retry(&retry);
    report.save(report_path)?;
    tracing::info!(retried = tasks.len(), recovered, "retry pass finished");

    println!(
        "Retried {}: {} recovered, {} still failing.",
        tasks.len(),
        recovered,
        report.failed()
    );
    Ok(())
}

/// `--delay` when given, else the delay the report was fetched with.
fn retry_delay(report: &BatchReport, overrides: Overrides) -> Result<Duration> {
    config::delay_from_secs(overrides.delay.unwrap_or(report.min_delay_secs))
}
