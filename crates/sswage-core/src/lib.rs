/// sswage Core: scanning, binning, and summary model.
///
/// This crate contains all business logic with no rendering dependencies.
/// The PNG front end lives in `sswage-report`.
///
/// # Modules
///
/// - [`config`]: Report configuration (scan root, subdirectories, bins).
/// - [`scanner`]: Serial directory walk collecting modification times.
/// - [`analysis`]: Age conversion, histogram binning, change summary.
/// - [`export`]: `summary.csv` / `summary.json` writers.
/// - [`error`]: Typed errors shared by the workspace.
pub mod analysis;
pub mod config;
pub mod error;
pub mod export;
pub mod scanner;

pub use config::{BinSpec, ReportConfig};
pub use error::{Error, Result};
