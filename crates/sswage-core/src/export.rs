/// Summary export: writes the ranked change summary next to the images.
///
/// `summary.csv` holds one row per subdirectory in rank order;
/// `summary.json` holds the full [`Summary`] including totals.
use crate::analysis::Summary;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const SUMMARY_CSV: &str = "summary.csv";
pub const SUMMARY_JSON: &str = "summary.json";

/// Column order of `summary.csv`; matches the field order of `SummaryRow`.
const CSV_HEADER: [&str; 5] = [
    "rank",
    "subdirectory",
    "files",
    "recent_files",
    "recent_fraction",
];

/// Paths of the files written by [`write_summary`].
#[derive(Debug, Clone)]
pub struct SummaryFiles {
    pub csv: PathBuf,
    pub json: PathBuf,
}

/// Write `summary.csv` and `summary.json` into `output_dir`.
///
/// The directory must already exist. Existing files are overwritten.
pub fn write_summary(summary: &Summary, output_dir: &Path) -> Result<SummaryFiles> {
    let csv_path = output_dir.join(SUMMARY_CSV);
    write_csv(summary, &csv_path)?;

    let json_path = output_dir.join(SUMMARY_JSON);
    let json = serde_json::to_string_pretty(summary)?;
    fs::write(&json_path, json).map_err(|e| Error::io(&json_path, e))?;

    info!(
        csv = %csv_path.display(),
        json = %json_path.display(),
        "Summary written"
    );
    Ok(SummaryFiles {
        csv: csv_path,
        json: json_path,
    })
}

fn write_csv(summary: &Summary, path: &Path) -> Result<()> {
    // Header written by hand so an empty summary still gets one.
    let file = fs::File::create(path).map_err(|e| Error::io(path, e))?;
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    wtr.write_record(CSV_HEADER)?;
    for row in &summary.rows {
        wtr.serialize(row)?;
    }
    wtr.flush().map_err(|e| Error::io(path, e))?;
    Ok(())
}
