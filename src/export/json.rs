//! JSON Export functionality
//!
//! Exports the derived summary of a snapshot, plus its monthly history, with
//! schema versioning.

use std::io::Write;

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

use crate::error::{MonthwiseError, MonthwiseResult};
use crate::models::{MonthBucket, UserData};
use crate::services::{BalanceService, DashboardSummary, MonthlyBalance};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Summary export structure
#[derive(Debug, Clone, Serialize)]
pub struct SummaryExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub summary: DashboardSummary,

    pub history: Vec<MonthlyBalance>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize)]
pub struct ExportMetadata {
    pub income_count: usize,
    pub expense_count: usize,
    pub budget_count: usize,
    /// Earliest month holding any record
    pub earliest_month: Option<MonthBucket>,
    /// Latest month holding any record
    pub latest_month: Option<MonthBucket>,
}

impl SummaryExport {
    /// Build an export of `data` for the month `bucket`
    pub fn build<Tz: TimeZone>(
        data: &UserData,
        now: DateTime<Utc>,
        bucket: MonthBucket,
        tz: &Tz,
    ) -> Self {
        let history = BalanceService::new(&data.income, &data.expenses, tz).monthly_history();

        let metadata = ExportMetadata {
            income_count: data.income.len(),
            expense_count: data.expenses.len(),
            budget_count: data.budgets.len(),
            earliest_month: history.first().map(|r| r.bucket),
            latest_month: history.last().map(|r| r.bucket),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: now,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            summary: DashboardSummary::for_month(data, now, bucket, tz),
            history,
            metadata,
        }
    }
}

/// Write the export as JSON
pub fn export_summary_json<W: Write>(
    export: &SummaryExport,
    writer: &mut W,
    pretty: bool,
) -> MonthwiseResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, export)
    } else {
        serde_json::to_writer(writer, export)
    }
    .map_err(|e| MonthwiseError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseRecord, IncomeRecord, Money};

    fn sample() -> (UserData, DateTime<Utc>, MonthBucket) {
        let jan = Utc.with_ymd_and_hms(2025, 1, 10, 12, 0, 0).unwrap();
        let feb = Utc.with_ymd_and_hms(2025, 2, 10, 12, 0, 0).unwrap();
        let data = UserData {
            income: vec![IncomeRecord::new("i1", Money::from_units(5000), jan).with_source("Salary")],
            expenses: vec![ExpenseRecord::new("e1", Money::from_units(1200), feb).with_name("Groceries")],
            ..UserData::default()
        };
        (data, feb, MonthBucket::new(2025, 2).unwrap())
    }

    #[test]
    fn test_build_export() {
        let (data, now, bucket) = sample();
        let export = SummaryExport::build(&data, now, bucket, &Utc);

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.history.len(), 2);
        assert_eq!(export.metadata.earliest_month, MonthBucket::new(2025, 1).ok());
        assert_eq!(export.metadata.latest_month, Some(bucket));
        assert_eq!(export.summary.balance.current_balance, Money::from_units(3800));
    }

    #[test]
    fn test_json_output() {
        let (data, now, bucket) = sample();
        let export = SummaryExport::build(&data, now, bucket, &Utc);

        let mut buffer = Vec::new();
        export_summary_json(&export, &mut buffer, false).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(value["schema_version"], "1.0.0");
        assert_eq!(value["summary"]["balance"]["current_balance"], 3800);
        assert_eq!(value["summary"]["balance"]["rollover"], 5000);
        assert_eq!(value["history"][0]["bucket"]["month"], 1);
        assert_eq!(value["metadata"]["expense_count"], 1);
    }
}
