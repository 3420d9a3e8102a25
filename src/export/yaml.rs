//! YAML Export functionality
//!
//! The same summary export as JSON, in a human-readable form.

use std::io::Write;

use super::json::SummaryExport;
use crate::error::{MonthwiseError, MonthwiseResult};

/// Write the export as YAML with a comment header
pub fn export_summary_yaml<W: Write>(export: &SummaryExport, writer: &mut W) -> MonthwiseResult<()> {
    let export_err = |e: std::io::Error| MonthwiseError::Export(e.to_string());

    writeln!(writer, "# Monthwise Summary Export").map_err(export_err)?;
    writeln!(writer, "# Month: {}", export.summary.bucket.label()).map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, export).map_err(|e| MonthwiseError::Export(e.to_string()))?;

    Ok(())
}
