//! Budget Reconciliation Report
//!
//! Estimated vs actual spend per budget line for one month, with the
//! categories that saw spending but have no budget line.

use std::io::Write;

use chrono::TimeZone;

use crate::display::{format_balance, format_money, separator};
use crate::error::{MonthwiseError, MonthwiseResult};
use crate::models::{BudgetRecord, ExpenseRecord, Money, MonthBucket};
use crate::services::{find_budget, BudgetReconciliation, BudgetService};

/// Budget vs actual report for a month
#[derive(Debug, Clone)]
pub struct BudgetReconciliationReport {
    pub reconciliation: BudgetReconciliation,
}

impl BudgetReconciliationReport {
    /// Reconcile the budget covering `bucket`
    pub fn generate<Tz: TimeZone>(
        budgets: &[BudgetRecord],
        expenses: &[ExpenseRecord],
        bucket: MonthBucket,
        tz: &Tz,
    ) -> MonthwiseResult<Self> {
        let budget = find_budget(budgets, bucket)
            .ok_or_else(|| MonthwiseError::budget_not_found(bucket.to_string()))?;
        Ok(Self {
            reconciliation: BudgetService::new(expenses, tz).reconcile(budget),
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let rec = &self.reconciliation;
        let mut output = String::new();

        output.push_str(&format!("Budget for {}\n", rec.bucket.label()));
        output.push_str(&"=".repeat(72));
        output.push('\n');

        if let Some(income) = rec.expected_income {
            output.push_str(&format!("Expected income: {}\n", format_money(income, symbol)));
        }
        if let Some(unallocated) = rec.unallocated_income() {
            output.push_str(&format!(
                "Unallocated:     {}\n",
                format_balance(unallocated, symbol)
            ));
        }
        output.push('\n');

        output.push_str(&format!(
            "{:<24} {:>15} {:>15} {:>15}\n",
            "Category", "Estimated", "Actual", "Difference"
        ));
        output.push_str(&separator(72));
        output.push('\n');

        if rec.rows.is_empty() {
            output.push_str("  (no budget items)\n");
        }
        for row in &rec.rows {
            output.push_str(&format!(
                "{:<24} {:>15} {:>15} {:>15}\n",
                row.category,
                format_money(row.estimated, symbol),
                format_money(row.actual, symbol),
                format_balance(row.difference, symbol)
            ));
        }

        output.push_str(&separator(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<24} {:>15} {:>15} {:>15}\n",
            "TOTAL",
            format_money(rec.total_estimated, symbol),
            format_money(rec.total_actual, symbol),
            format_balance(rec.total_difference, symbol)
        ));

        if !rec.unbudgeted.is_empty() {
            output.push_str("\nSpending without a budget line:\n");
            for spend in &rec.unbudgeted {
                output.push_str(&format!(
                    "  {:<22} {:>15}\n",
                    spend.category,
                    format_money(spend.actual, symbol)
                ));
            }
        }

        output.push_str("\n* = Over budget\n");
        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> MonthwiseResult<()> {
        let rec = &self.reconciliation;
        let month = rec.bucket.to_string();
        let mut csv = csv::Writer::from_writer(writer);
        let export_err = |e: csv::Error| MonthwiseError::Export(e.to_string());

        csv.write_record(["Month", "Category", "Estimated", "Actual", "Difference"])
            .map_err(export_err)?;

        for row in &rec.rows {
            let record = vec![
                month.clone(),
                row.category.clone(),
                decimal(row.estimated),
                decimal(row.actual),
                decimal(row.difference),
            ];
            csv.write_record(&record).map_err(export_err)?;
        }

        let totals = vec![
            month,
            "TOTAL".to_string(),
            decimal(rec.total_estimated),
            decimal(rec.total_actual),
            decimal(rec.total_difference),
        ];
        csv.write_record(&totals).map_err(export_err)?;

        csv.flush()
            .map_err(|e| MonthwiseError::Export(e.to_string()))?;
        Ok(())
    }
}

fn decimal(amount: Money) -> String {
    format!("{:.2}", amount.to_decimal())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn setup() -> (Vec<BudgetRecord>, Vec<ExpenseRecord>, MonthBucket) {
        let bucket = MonthBucket::new(2025, 3).unwrap();
        let created = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
        let budgets = vec![BudgetRecord::new("bud-1", bucket)
            .with_item("Food", Money::from_units(10000))
            .with_item("Rent/Mortgage", Money::from_units(150000))
            .with_expected_income(Money::from_units(200000))];
        let expenses = vec![
            ExpenseRecord::new("e1", Money::from_units(4000), created).with_name("Food"),
            ExpenseRecord::new("e2", Money::from_units(3000), created).with_name("Food"),
            ExpenseRecord::new("e3", Money::from_units(900), created).with_name("Cinema, IMAX"),
        ];
        (budgets, expenses, bucket)
    }

    #[test]
    fn test_generate_report() {
        let (budgets, expenses, bucket) = setup();
        let report = BudgetReconciliationReport::generate(&budgets, &expenses, bucket, &Utc).unwrap();

        assert_eq!(report.reconciliation.rows.len(), 2);
        assert_eq!(report.reconciliation.total_actual, Money::from_units(7000));
        assert_eq!(report.reconciliation.unbudgeted.len(), 1);
    }

    #[test]
    fn test_missing_budget() {
        let (budgets, expenses, _) = setup();
        let other = MonthBucket::new(2025, 4).unwrap();
        let err = BudgetReconciliationReport::generate(&budgets, &expenses, other, &Utc).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_terminal_format() {
        let (budgets, expenses, bucket) = setup();
        let report = BudgetReconciliationReport::generate(&budgets, &expenses, bucket, &Utc).unwrap();
        let output = report.format_terminal("₦");

        assert!(output.contains("Budget for March 2025"));
        assert!(output.contains("Food"));
        assert!(output.contains("₦3,000.00"));
        assert!(output.contains("Unallocated:     ₦40,000.00"));
        assert!(output.contains("Cinema, IMAX"));
        assert!(output.contains("TOTAL"));
    }

    #[test]
    fn test_csv_export() {
        let (budgets, expenses, bucket) = setup();
        let report = BudgetReconciliationReport::generate(&budgets, &expenses, bucket, &Utc).unwrap();

        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();
        let csv_string = String::from_utf8(buffer).unwrap();

        assert!(csv_string.starts_with("Month,Category,Estimated,Actual,Difference\n"));
        assert!(csv_string.contains("2025-03,Food,10000.00,7000.00,3000.00"));
        assert!(csv_string.contains("2025-03,TOTAL,160000.00,7000.00,153000.00"));
    }
}
