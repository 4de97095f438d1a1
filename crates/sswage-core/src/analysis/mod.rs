/// Analysis modules: turn collected timestamps into report data.

pub mod age;
pub mod histogram;
pub mod summary;

pub use age::{age_in_years, age_samples, SECONDS_PER_YEAR};
pub use histogram::Histogram;
pub use summary::{summarize, SubdirectoryStats, Summary, SummaryRow};
