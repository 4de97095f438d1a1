/// sswage Report: PNG histogram rendering and the report pipeline.
///
/// This crate owns everything that touches `plotters`. Scanning, binning and
/// the summary model live in `sswage-core`.
pub mod chart;
pub mod error;
pub mod font;
pub mod pipeline;
pub mod theme;

pub use chart::{draw_histogram, HistogramChart};
pub use error::RenderError;
pub use pipeline::{
    chart_title, render_subdirectory_report, render_subdirectory_reports, run_report, RunOutcome,
    SubdirectoryReport,
};
pub use theme::ChartTheme;
