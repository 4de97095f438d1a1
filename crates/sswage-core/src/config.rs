/// Report configuration.
///
/// Everything the run needs is held in one [`ReportConfig`] value and
/// passed explicitly to the scanner, the binning step and the renderer.
/// The SolarSoft layout the tool was written for is available through
/// [`ReportConfig::ssw`].
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Default scan root, relative to the user's home directory.
pub const SSW_ROOT: &str = "~/ssw/";

/// Default output directory. Must exist before the run starts.
pub const SSW_OUTPUT: &str = "~/sdac_code/ssw_changes/output/";

/// IDL source files.
pub const DEFAULT_EXTENSION: &str = ".pro";

/// The parts of SSW whose change history is reported, in report order.
pub const SSW_SUBDIRECTORIES: &[&str] = &[
    "gen",
    "goesn",
    "goesr",
    "hessi",
    "hinode",
    "iris",
    "offline",
    "proba2",
    "radio",
    "sdo",
    "site",
    "so",
    "soho",
    "stereo",
    "trace",
    "vobs",
    "yohkoh",
    "packages/azam",
    "packages/binaries",
    "packages/chianti",
    "packages/mjastereo",
    "packages/nrl",
    "packages/s3drs",
    "packages/sbrowser",
    "packages/spex",
    "packages/sunspice",
    "packages/xray",
];

/// Equal-width histogram bins over `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinSpec {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl Default for BinSpec {
    /// 80 half-year bins from 0 to 40 years.
    fn default() -> Self {
        Self {
            start: 0.0,
            end: 40.0,
            count: 80,
        }
    }
}

impl BinSpec {
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(Error::InvalidBins("bin count must be at least 1".into()));
        }
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(Error::InvalidBins(format!(
                "bin range {}..{} is not finite",
                self.start, self.end
            )));
        }
        if self.end <= self.start {
            return Err(Error::InvalidBins(format!(
                "bin range end {} must be greater than start {}",
                self.end, self.start
            )));
        }
        Ok(())
    }

    pub fn width(&self) -> f64 {
        (self.end - self.start) / self.count as f64
    }
}

/// Configuration for one reporting run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Directory the subdirectories are resolved against.
    pub scan_root: PathBuf,
    /// Relative subdirectories, one report each, in this order.
    pub subdirectories: Vec<String>,
    /// Where images and the summary are written.
    pub output_dir: PathBuf,
    /// Case-sensitive file-name suffix, including the leading dot.
    pub extension: String,
    pub bins: BinSpec,
    /// Upper limit of the visible x-axis, in years. Samples past it are
    /// still binned.
    pub view_max_years: f64,
    /// Files at most this many years old count as recently changed.
    pub recent_window_years: f64,
}

impl ReportConfig {
    /// A configuration with the standard subdirectories, extension and bins
    /// at arbitrary root and output paths.
    pub fn new(scan_root: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            scan_root: scan_root.into(),
            subdirectories: SSW_SUBDIRECTORIES.iter().map(|s| s.to_string()).collect(),
            output_dir: output_dir.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            bins: BinSpec::default(),
            view_max_years: 5.0,
            recent_window_years: 5.0,
        }
    }

    /// The SolarSoft installation in the current user's home directory.
    pub fn ssw() -> Result<Self> {
        Ok(Self::new(expand_home(SSW_ROOT)?, expand_home(SSW_OUTPUT)?))
    }

    /// Replace the subdirectory list.
    pub fn with_subdirectories<I, S>(mut self, subdirectories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subdirectories = subdirectories.into_iter().map(Into::into).collect();
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.bins.validate()
    }

    /// Absolute directory scanned for `subdirectory`.
    pub fn scan_path(&self, subdirectory: &str) -> PathBuf {
        self.scan_root.join(subdirectory)
    }

    /// Path of the PNG written for `subdirectory`.
    pub fn image_path(&self, subdirectory: &str) -> PathBuf {
        self.output_dir.join(image_file_name(subdirectory))
    }
}

/// `packages/azam` becomes `packages_azam.png`.
pub fn image_file_name(subdirectory: &str) -> String {
    let flat: String = subdirectory
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    format!("{flat}.png")
}

/// Expand a leading `~` to the user's home directory.
///
/// Paths without a leading `~` are returned unchanged. `~user` forms are
/// not supported and are also returned unchanged.
pub fn expand_home(path: &str) -> Result<PathBuf> {
    let rest = if path == "~" {
        ""
    } else if let Some(rest) = path.strip_prefix("~/") {
        rest
    } else {
        return Ok(PathBuf::from(path));
    };
    let home = dirs::home_dir().ok_or_else(|| Error::HomeDirUnavailable(path.to_string()))?;
    Ok(join_home(&home, rest))
}

fn join_home(home: &Path, rest: &str) -> PathBuf {
    if rest.is_empty() {
        home.to_path_buf()
    } else {
        home.join(rest)
    }
}
