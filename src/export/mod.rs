//! Export module for Monthwise
//!
//! Provides data export functionality in multiple formats:
//! - CSV: income and expense records (spreadsheet-compatible)
//! - JSON: machine-readable summary and history
//! - YAML: human-readable summary and history

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_records_csv;
pub use json::{export_summary_json, ExportMetadata, SummaryExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_summary_yaml;
