//! `pfetch status <report>` – show the entries of a report.

use anyhow::Result;
use pfetch_core::checksum;
use pfetch_core::report::{BatchReport, ReportEntry};
use std::path::Path;

pub fn run_status(report_path: &Path, verify: bool) -> Result<()> {
    let report = BatchReport::load(report_path)?;
    if report.is_empty() {
        println!("Report is empty.");
        return Ok(());
    }

    println!("{:<8} {:<30} {:<30} {}", "STATUS", "FOLDER", "FILE", "DETAIL");
    for entry in &report.entries {
        let detail = if entry.is_failure() {
            entry.error.clone().unwrap_or_default()
        } else if verify {
            verify_entry(entry)
        } else {
            entry
                .bytes
                .map(|b| format!("{b} bytes"))
                .unwrap_or_else(|| "-".to_string())
        };
        println!(
            "{:<8} {:<30} {:<30} {}",
            format!("{:?}", entry.status).to_lowercase(),
            entry.destination_folder,
            entry.filename,
            detail
        );
    }
    println!(
        "{} entries: {} succeeded, {} failed (output: {})",
        report.len(),
        report.succeeded(),
        report.failed(),
        report.output_dir.display()
    );
    Ok(())
}

fn verify_entry(entry: &ReportEntry) -> String {
    let (Some(path), Some(expected)) = (&entry.path, &entry.sha256) else {
        return "no checksum recorded".to_string();
    };
    match checksum::sha256_path(path) {
        Ok(actual) if &actual == expected => "checksum ok".to_string(),
        Ok(_) => "CHECKSUM MISMATCH".to_string(),
        Err(e) => format!("unreadable: {e:#}"),
    }
}
