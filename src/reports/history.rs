//! Monthly History Report
//!
//! Month-by-month opening balance, income, expenses and closing balance.

use std::io::Write;

use chrono::TimeZone;

use crate::display::{format_balance, format_money, separator};
use crate::error::{MonthwiseError, MonthwiseResult};
use crate::models::{ExpenseRecord, IncomeRecord};
use crate::services::{BalanceService, MonthlyBalance};

#[derive(Debug, Clone)]
pub struct MonthlyHistoryReport {
    pub rows: Vec<MonthlyBalance>,
}

impl MonthlyHistoryReport {
    pub fn generate<Tz: TimeZone>(
        income: &[IncomeRecord],
        expenses: &[ExpenseRecord],
        tz: &Tz,
    ) -> Self {
        Self {
            rows: BalanceService::new(income, expenses, tz).monthly_history(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        if self.rows.is_empty() {
            return "No records yet.\n".to_string();
        }

        let mut output = String::new();
        output.push_str(&format!(
            "{:<16} {:>15} {:>15} {:>15} {:>15}\n",
            "Month", "Opening", "Income", "Expenses", "Closing"
        ));
        output.push_str(&separator(80));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<16} {:>15} {:>15} {:>15} {:>15}\n",
                row.bucket.label(),
                format_balance(row.opening, symbol),
                format_money(row.income, symbol),
                format_money(row.expenses, symbol),
                format_balance(row.closing, symbol)
            ));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> MonthwiseResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        let export_err = |e: csv::Error| MonthwiseError::Export(e.to_string());

        csv.write_record(["Month", "Opening", "Income", "Expenses", "Closing"])
            .map_err(export_err)?;
        for row in &self.rows {
            let record = vec![
                row.bucket.to_string(),
                format!("{:.2}", row.opening.to_decimal()),
                format!("{:.2}", row.income.to_decimal()),
                format!("{:.2}", row.expenses.to_decimal()),
                format!("{:.2}", row.closing.to_decimal()),
            ];
            csv.write_record(&record).map_err(export_err)?;
        }

        csv.flush()
            .map_err(|e| MonthwiseError::Export(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::Utc;

    fn setup() -> (Vec<IncomeRecord>, Vec<ExpenseRecord>) {
        let at = |m: u32| Utc.with_ymd_and_hms(2024, m, 5, 12, 0, 0).unwrap();
        (
            vec![
                IncomeRecord::new("i1", Money::from_units(1000), at(1)),
                IncomeRecord::new("i2", Money::from_units(1000), at(2)),
            ],
            vec![ExpenseRecord::new("e1", Money::from_units(1500), at(1))],
        )
    }

    #[test]
    fn test_terminal_format() {
        let (income, expenses) = setup();
        let report = MonthlyHistoryReport::generate(&income, &expenses, &Utc);
        let output = report.format_terminal("₦");

        assert_eq!(report.rows.len(), 2);
        assert!(output.contains("January 2024"));
        assert!(output.contains("-₦500.00 *"));
        assert!(output.contains("February 2024"));
    }

    #[test]
    fn test_csv_export() {
        let (income, expenses) = setup();
        let report = MonthlyHistoryReport::generate(&income, &expenses, &Utc);

        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();
        let csv_string = String::from_utf8(buffer).unwrap();

        assert!(csv_string.contains("2024-01,0.00,1000.00,1500.00,-500.00"));
        assert!(csv_string.contains("2024-02,-500.00,1000.00,0.00,500.00"));
    }

    #[test]
    fn test_empty() {
        let report = MonthlyHistoryReport::generate(&[], &[], &Utc);
        assert_eq!(report.format_terminal("₦"), "No records yet.\n");
    }
}
