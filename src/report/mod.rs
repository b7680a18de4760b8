//! Presentation helpers: currency formatting, summary boxes, chart series and export

mod format;
mod summary;
mod chart;
mod dashboard;
pub mod export;

pub use format::{format_euros, format_number, CURRENCY_SUFFIX, GROUP_SEPARATOR};
pub use summary::SummaryBox;
pub use chart::{ChartData, ChartDataset, SeriesStyle};
pub use dashboard::{Dashboard, Rendered};
pub use export::{write_points_csv, write_summaries_csv};
