/// Change summary across all reported subdirectories.
///
/// Totals the files found, works out what fraction of each subdirectory
/// (and of the whole tree) was modified within the recent window, and ranks
/// subdirectories by that fraction.
use crate::config::ReportConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::PathBuf;

/// File counts for one subdirectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubdirectoryStats {
    pub subdirectory: String,
    pub files: u64,
    pub recent_files: u64,
}

impl SubdirectoryStats {
    /// Count the samples that fall inside `[0, window_years]`.
    pub fn from_ages(subdirectory: impl Into<String>, ages: &[f64], window_years: f64) -> Self {
        let recent_files = ages
            .iter()
            .filter(|&&age| (0.0..=window_years).contains(&age))
            .count() as u64;
        Self {
            subdirectory: subdirectory.into(),
            files: ages.len() as u64,
            recent_files,
        }
    }

    pub fn recent_fraction(&self) -> f64 {
        fraction(self.recent_files, self.files)
    }
}

/// One ranked line of the summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub rank: usize,
    pub subdirectory: String,
    pub files: u64,
    pub recent_files: u64,
    pub recent_fraction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub generated_at: DateTime<Utc>,
    pub scan_root: PathBuf,
    pub extension: String,
    pub recent_window_years: f64,
    pub total_files: u64,
    pub total_recent_files: u64,
    pub overall_recent_fraction: f64,
    /// Highest recent fraction first.
    pub rows: Vec<SummaryRow>,
}

/// Build the ranked summary.
///
/// Ties on the recent fraction go to the subdirectory with more files, then
/// to the alphabetically first name, so the ranking is stable across runs.
pub fn summarize(
    stats: &[SubdirectoryStats],
    config: &ReportConfig,
    generated_at: DateTime<Utc>,
) -> Summary {
    let total_files: u64 = stats.iter().map(|s| s.files).sum();
    let total_recent_files: u64 = stats.iter().map(|s| s.recent_files).sum();

    let mut ordered: Vec<&SubdirectoryStats> = stats.iter().collect();
    ordered.sort_by(|a, b| {
        b.recent_fraction()
            .partial_cmp(&a.recent_fraction())
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.files.cmp(&a.files))
            .then_with(|| a.subdirectory.cmp(&b.subdirectory))
    });

    let rows = ordered
        .into_iter()
        .enumerate()
        .map(|(i, s)| SummaryRow {
            rank: i + 1,
            subdirectory: s.subdirectory.clone(),
            files: s.files,
            recent_files: s.recent_files,
            recent_fraction: s.recent_fraction(),
        })
        .collect();

    Summary {
        generated_at,
        scan_root: config.scan_root.clone(),
        extension: config.extension.clone(),
        recent_window_years: config.recent_window_years,
        total_files,
        total_recent_files,
        overall_recent_fraction: fraction(total_recent_files, total_files),
        rows,
    }
}

fn fraction(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(name: &str, files: u64, recent: u64) -> SubdirectoryStats {
        SubdirectoryStats {
            subdirectory: name.to_string(),
            files,
            recent_files: recent,
        }
    }

    #[test]
    fn from_ages_counts_the_window_inclusively() {
        let s = SubdirectoryStats::from_ages("gen", &[0.0, 1.0, 5.0, 5.01, 20.0, -0.5], 5.0);
        assert_eq!(s.files, 6);
        assert_eq!(s.recent_files, 3);
    }

    #[test]
    fn empty_subdirectory_has_zero_fraction() {
        let s = SubdirectoryStats::from_ages("so", &[], 5.0);
        assert_eq!(s.files, 0);
        assert_eq!(s.recent_fraction(), 0.0);
    }

    #[test]
    fn totals_and_overall_fraction() {
        let config = ReportConfig::new("/r", "/o");
        let summary = summarize(
            &[stats("gen", 10, 5), stats("iris", 30, 3), stats("so", 0, 0)],
            &config,
            Utc::now(),
        );
        assert_eq!(summary.total_files, 40);
        assert_eq!(summary.total_recent_files, 8);
        assert!((summary.overall_recent_fraction - 0.2).abs() < 1e-12);
        assert_eq!(summary.extension, ".pro");
    }

    #[test]
    fn rows_are_ranked_by_recent_fraction() {
        let config = ReportConfig::new("/r", "/o");
        let summary = summarize(
            &[stats("gen", 10, 1), stats("iris", 4, 4), stats("sdo", 10, 5)],
            &config,
            Utc::now(),
        );
        let names: Vec<_> = summary.rows.iter().map(|r| r.subdirectory.as_str()).collect();
        assert_eq!(names, ["iris", "sdo", "gen"]);
        let ranks: Vec<_> = summary.rows.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, [1, 2, 3]);
    }

    #[test]
    fn ties_prefer_more_files_then_name() {
        let config = ReportConfig::new("/r", "/o");
        let summary = summarize(
            &[
                stats("yohkoh", 2, 1),
                stats("trace", 8, 4),
                stats("soho", 2, 1),
                stats("vobs", 0, 0),
            ],
            &config,
            Utc::now(),
        );
        let names: Vec<_> = summary.rows.iter().map(|r| r.subdirectory.as_str()).collect();
        assert_eq!(names, ["trace", "soho", "yohkoh", "vobs"]);
    }

    #[test]
    fn empty_input_summarises_to_zero() {
        let config = ReportConfig::new("/r", "/o");
        let summary = summarize(&[], &config, Utc::now());
        assert_eq!(summary.total_files, 0);
        assert_eq!(summary.overall_recent_fraction, 0.0);
        assert!(summary.rows.is_empty());
    }
}
