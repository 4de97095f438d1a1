/// Report pipeline: scan, bin, draw and save, one subdirectory at a time.
///
/// Execution is a single linear pass over the configured subdirectories.
/// Each one is finished (scan → bin → render → save) before the next starts.
/// After the last image the change summary is built and written.
use crate::chart::{draw_histogram, HistogramChart};
use crate::error::Result;
use crate::theme::ChartTheme;
use chrono::Utc;
use sswage_core::analysis::{age_samples, summarize, Histogram, SubdirectoryStats, Summary};
use sswage_core::export::{write_summary, SummaryFiles};
use sswage_core::scanner::collect_modification_times;
use sswage_core::ReportConfig;
use std::path::PathBuf;
use std::time::SystemTime;
use tracing::info;

/// What was produced for one subdirectory.
#[derive(Debug, Clone)]
pub struct SubdirectoryReport {
    pub subdirectory: String,
    pub image_path: PathBuf,
    /// Files whose modification time was read.
    pub files: usize,
    /// Matching files that had to be skipped.
    pub skipped: u64,
    /// Directories under the subdirectory that could not be listed.
    pub unreadable_dirs: u64,
    pub histogram: Histogram,
    pub stats: SubdirectoryStats,
}

/// Everything a full run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub reports: Vec<SubdirectoryReport>,
    pub summary: Summary,
    pub summary_files: SummaryFiles,
}

/// `gen (412 files in subdirectory)`
pub fn chart_title(subdirectory: &str, files: usize) -> String {
    format!("{subdirectory} ({files} files in subdirectory)")
}

/// Scan one subdirectory and save its histogram image.
pub fn render_subdirectory_report(
    config: &ReportConfig,
    subdirectory: &str,
    theme: &ChartTheme,
) -> Result<SubdirectoryReport> {
    let scan_path = config.scan_path(subdirectory);
    let collection = collect_modification_times(&scan_path, &config.extension);

    // One "now" per subdirectory, taken after its scan.
    let now = SystemTime::now();
    let ages = age_samples(now, &collection.modified);
    let histogram = Histogram::from_samples(config.bins, &ages)?;
    let stats = SubdirectoryStats::from_ages(subdirectory, &ages, config.recent_window_years);

    let image_path = config.image_path(subdirectory);
    let chart = HistogramChart {
        title: chart_title(subdirectory, collection.len()),
        histogram: &histogram,
        view_max: config.view_max_years,
    };
    draw_histogram(&image_path, &chart, theme)?;

    info!(
        subdirectory,
        files = collection.len(),
        skipped = collection.skipped,
        unreadable_dirs = collection.unreadable_dirs,
        image = %image_path.display(),
        "Rendered histogram"
    );

    Ok(SubdirectoryReport {
        subdirectory: subdirectory.to_string(),
        image_path,
        files: collection.len(),
        skipped: collection.skipped,
        unreadable_dirs: collection.unreadable_dirs,
        histogram,
        stats,
    })
}

/// Render every configured subdirectory in order.
///
/// Stops at the first failure to save an image.
pub fn render_subdirectory_reports(
    config: &ReportConfig,
    theme: &ChartTheme,
) -> Result<Vec<SubdirectoryReport>> {
    config.validate()?;
    config
        .subdirectories
        .iter()
        .map(|subdirectory| render_subdirectory_report(config, subdirectory, theme))
        .collect()
}

/// The full run: every histogram, then the change summary.
pub fn run_report(config: &ReportConfig) -> Result<RunOutcome> {
    info!(
        root = %config.scan_root.display(),
        output = %config.output_dir.display(),
        extension = %config.extension,
        subdirectories = config.subdirectories.len(),
        "Starting report"
    );

    let theme = ChartTheme::default();
    let reports = render_subdirectory_reports(config, &theme)?;

    let stats: Vec<SubdirectoryStats> = reports.iter().map(|r| r.stats.clone()).collect();
    let summary = summarize(&stats, config, Utc::now());
    log_ranking(&summary);
    let summary_files = write_summary(&summary, &config.output_dir)?;

    Ok(RunOutcome {
        reports,
        summary,
        summary_files,
    })
}

fn log_ranking(summary: &Summary) {
    info!(
        total_files = summary.total_files,
        recent_files = summary.total_recent_files,
        "{:.1}% of all files changed in the last {} years",
        summary.overall_recent_fraction * 100.0,
        summary.recent_window_years
    );
    for row in &summary.rows {
        info!(
            "#{:<2} {:<20} {:>6} files, {:>6} recent ({:.1}%)",
            row.rank,
            row.subdirectory,
            row.files,
            row.recent_files,
            row.recent_fraction * 100.0
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_names_subdirectory_and_count() {
        assert_eq!(chart_title("gen", 412), "gen (412 files in subdirectory)");
        assert_eq!(
            chart_title("packages/azam", 0),
            "packages/azam (0 files in subdirectory)"
        );
    }
}
