//! sswage: how recently was each part of SolarSoft changed?
//!
//! Thin binary entry point. All logic lives in the `sswage-core`
//! and `sswage-report` crates. There are no flags: the SSW layout,
//! output directory and bins come from `ReportConfig::ssw`.

use anyhow::Context;
use sswage_core::ReportConfig;

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("sswage starting");

    let config = ReportConfig::ssw().context("failed to resolve the SSW paths")?;
    let outcome = sswage_report::run_report(&config).with_context(|| {
        format!(
            "report run failed (output directory {} must exist and be writable)",
            config.output_dir.display()
        )
    })?;

    tracing::info!(
        images = outcome.reports.len(),
        total_files = outcome.summary.total_files,
        summary = %outcome.summary_files.csv.display(),
        "sswage finished"
    );
    Ok(())
}
