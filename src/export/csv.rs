//! CSV Export functionality
//!
//! Flattens income and expense records into one spreadsheet-friendly table,
//! one row per record, with the month each record counts toward.

use std::io::Write;

use chrono::TimeZone;

use crate::display::format_date;
use crate::error::{MonthwiseError, MonthwiseResult};
use crate::models::UserData;
use crate::services::DerivedReimbursementStatus;

const DATE_FORMAT: &str = "%Y-%m-%d";

const HEADER: [&str; 8] = [
    "Type",
    "ID",
    "Date",
    "Month",
    "Name",
    "Recurring",
    "Amount",
    "Reimbursement",
];

/// Export every income and expense record to CSV, income first
pub fn export_records_csv<Tz: TimeZone, W: Write>(
    data: &UserData,
    tz: &Tz,
    writer: W,
) -> MonthwiseResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    let export_err = |e: csv::Error| MonthwiseError::Export(e.to_string());

    csv.write_record(HEADER).map_err(export_err)?;

    for income in &data.income {
        let record = vec![
            "income".to_string(),
            income.id.to_string(),
            format_date(&income.created_at, tz, DATE_FORMAT),
            income.bucket(tz).to_string(),
            income.display_source().to_string(),
            income.is_recurring.to_string(),
            format!("{:.2}", income.amount.to_decimal()),
            String::new(),
        ];
        csv.write_record(&record).map_err(export_err)?;
    }

    for expense in &data.expenses {
        let status = DerivedReimbursementStatus::derive(&expense.reimbursements);
        let record = vec![
            "expense".to_string(),
            expense.id.to_string(),
            format_date(&expense.effective_date(), tz, DATE_FORMAT),
            expense.bucket(tz).to_string(),
            expense.display_name().to_string(),
            expense.is_recurring.to_string(),
            format!("{:.2}", expense.amount.to_decimal()),
            status.to_string(),
        ];
        csv.write_record(&record).map_err(export_err)?;
    }

    csv.flush()
        .map_err(|e| MonthwiseError::Export(e.to_string()))?;
    Ok(())
}
