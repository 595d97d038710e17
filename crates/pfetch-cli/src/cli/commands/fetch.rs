//! `pfetch fetch <links>` – plan tasks from scraped links and download them.

use anyhow::{Context, Result};
use pfetch_core::config::PfetchConfig;
use pfetch_core::report::{BatchReport, DEFAULT_REPORT_NAME};
use pfetch_core::storage;
use pfetch_core::task::{load_links, TaskPlanner};
use pfetch_core::Fetcher;
use std::path::{Path, PathBuf};
use url::Url;

use super::Overrides;

#[derive(Debug)]
pub struct FetchArgs {
    pub links: PathBuf,
    pub base_url: Option<String>,
    pub out: Option<PathBuf>,
    pub report: Option<PathBuf>,
}

pub fn run_fetch(cfg: &PfetchConfig, args: &FetchArgs, overrides: Overrides) -> Result<()> {
    let cfg = overrides.apply(cfg);
    cfg.validate()?;
    let min_delay = cfg.min_delay()?;
    let base_url = args
        .base_url
        .as_deref()
        .map(Url::parse)
        .transpose()
        .context("invalid --base-url")?;

    let links = load_links(&args.links)?;
    let tasks = TaskPlanner::new(base_url, cfg.default_extension.clone()).plan(&links);

    let output_dir = resolve_output_dir(args.out.as_deref(), cfg.output_dir.as_deref())?;
    println!(
        "Fetching {} link(s) into {} ({:.1}s between requests)",
        tasks.len(),
        output_dir.display(),
        min_delay.as_secs_f64()
    );

    let mut fetcher = Fetcher::from_config(&cfg, output_dir);
    let results = fetcher.fetch_all(&tasks, min_delay);
    let output_dir = fetcher.output_dir();
    let report = BatchReport::from_results(output_dir, min_delay, &results);

    let report_path = args
        .report
        .clone()
        .unwrap_or_else(|| output_dir.join(DEFAULT_REPORT_NAME));
    report.save(&report_path)?;

    for entry in report.failures() {
        println!(
            "  failed: {} -> {}/{}: {}",
            entry.url,
            entry.destination_folder,
            entry.filename,
            entry.error.as_deref().unwrap_or("unknown error")
        );
    }
    println!(
        "{} succeeded, {} failed. Report: {}",
        report.succeeded(),
        report.failed(),
        report_path.display()
    );
    if report.failed() > 0 {
        println!("Run `pfetch retry {}` to retry the failures.", report_path.display());
    }
    Ok(())
}

/// `--out`, else the configured `output_dir`, else the current directory;
/// always absolute, since the report is reused from other directories.
pub(crate) fn resolve_output_dir(out: Option<&Path>, configured: Option<&Path>) -> Result<PathBuf> {
    match out.or(configured) {
        Some(dir) => storage::absolute_dir(dir)
            .with_context(|| format!("resolve output directory {}", dir.display())),
        None => std::env::current_dir().context("read current directory"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_dir_is_always_absolute() {
        let cwd = std::env::current_dir().unwrap();

        let from_flag = resolve_output_dir(Some(Path::new("pdfs")), Some(Path::new("/srv/pdfs")));
        assert_eq!(from_flag.unwrap(), cwd.join("pdfs"));

        let from_config = resolve_output_dir(None, Some(Path::new("cfg/pdfs"))).unwrap();
        assert!(from_config.is_absolute());
        assert_eq!(from_config, cwd.join("cfg/pdfs"));

        assert_eq!(resolve_output_dir(None, None).unwrap(), cwd);
        assert_eq!(
            resolve_output_dir(Some(Path::new("/srv/pdfs")), None).unwrap(),
            Path::new("/srv/pdfs")
        );
    }

    #[test]
    fn report_from_relative_out_records_absolute_paths() {
        let dir = tempfile::tempdir().unwrap();
        let links = dir.path().join("links.json");
        std::fs::write(&links, r#"[{"name": "Smith, John", "url": "not a url"}]"#).unwrap();
        let report_path = dir.path().join("report.json");
        let args = FetchArgs {
            links,
            base_url: None,
            out: Some(PathBuf::from("pfetch-relative-out")),
            report: Some(report_path.clone()),
        };

        run_fetch(&PfetchConfig::default(), &args, Overrides::default()).unwrap();

        let report = BatchReport::load(&report_path).unwrap();
        assert!(report.output_dir.is_absolute());
        assert!(report.output_dir.ends_with("pfetch-relative-out"));
        assert_eq!(report.failed(), 1);
    }
}
