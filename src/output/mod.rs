//! Output formatting module
//! Builds the dashboard report and renders it as console, JSON, Markdown or HTML

pub mod content;
pub mod formatter;
pub mod report;
pub mod section_style;

pub use formatter::{report_path, save_report_to_file, suggest_filename, OutputFormatter, ReportGenerator};
pub use report::{DashboardReport, ReportMetadata, ScoreTier};
