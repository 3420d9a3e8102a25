//! Income and expense lists rendered as tables

use chrono::TimeZone;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format::{format_date, format_money, truncate};
use crate::models::{ExpenseRecord, IncomeRecord, Money};
use crate::services::{DerivedReimbursementStatus, ReimbursementSummary};

#[derive(Tabled)]
struct IncomeRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Recurring")]
    recurring: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Recurring")]
    recurring: String,
    #[tabled(rename = "Reimbursed")]
    reimbursed: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct ReimbursementRow {
    #[tabled(rename = "Expense")]
    expense: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Entries")]
    entries: usize,
    #[tabled(rename = "Reimbursed")]
    reimbursed: String,
    #[tabled(rename = "Outstanding")]
    outstanding: String,
    #[tabled(rename = "Status")]
    status: String,
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Income entries with a total line, dated in the viewer's zone
pub fn format_income_list<Tz: TimeZone>(
    records: &[&IncomeRecord],
    symbol: &str,
    date_format: &str,
    tz: &Tz,
) -> String {
    if records.is_empty() {
        return "No income recorded.\n".to_string();
    }

    let rows = records.iter().map(|r| IncomeRow {
        date: format_date(&r.created_at, tz, date_format),
        source: truncate(r.display_source(), 28),
        recurring: yes_no(r.is_recurring),
        amount: format_money(r.amount, symbol),
    });

    let total: Money = records.iter().map(|r| r.amount).sum();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\nTotal: {}\n", table, format_money(total, symbol))
}

/// Expense entries with a total line, dated in the viewer's zone
pub fn format_expense_list<Tz: TimeZone>(
    records: &[&ExpenseRecord],
    symbol: &str,
    date_format: &str,
    tz: &Tz,
) -> String {
    if records.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let rows = records.iter().map(|e| {
        let recurring = match (e.is_recurring, e.recurrence_interval) {
            (true, Some(interval)) => interval.to_string(),
            (flag, _) => yes_no(flag).to_string(),
        };
        let status = DerivedReimbursementStatus::derive(&e.reimbursements);
        ExpenseRow {
            date: format_date(&e.effective_date(), tz, date_format),
            name: truncate(e.display_name(), 28),
            recurring,
            reimbursed: status.to_string(),
            amount: format_money(e.amount, symbol),
        }
    });

    let total: Money = records.iter().map(|e| e.amount).sum();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\nTotal: {}\n", table, format_money(total, symbol))
}

/// Reimbursement status per expense
pub fn format_reimbursement_list(summaries: &[ReimbursementSummary], symbol: &str) -> String {
    if summaries.is_empty() {
        return "No reimbursements recorded.\n".to_string();
    }

    let rows = summaries.iter().map(|s| ReimbursementRow {
        expense: truncate(&s.expense_name, 28),
        amount: format_money(s.expense_amount, symbol),
        entries: s.entry_count,
        reimbursed: format_money(s.total_reimbursed, symbol),
        outstanding: if s.is_over_reimbursed() {
            format!("{} *", format_money(s.outstanding, symbol))
        } else {
            format_money(s.outstanding, symbol)
        },
        status: s.status.to_string(),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RecurrenceInterval, ReimbursementRecord, ReimbursementStatus};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_income_list() {
        let created = Utc.with_ymd_and_hms(2025, 3, 4, 0, 0, 0).unwrap();
        let salary = IncomeRecord::new("i1", Money::from_units(5000), created)
            .with_source("Salary")
            .recurring();
        let gift = IncomeRecord::new("i2", Money::from_units(250), created);

        let output = format_income_list(&[&salary, &gift], "₦", "%Y-%m-%d", &Utc);
        assert!(output.contains("Salary"));
        assert!(output.contains("Unnamed Source"));
        assert!(output.contains("2025-03-04"));
        assert!(output.contains("Total: ₦5,250.00"));
    }

    #[test]
    fn test_expense_list() {
        let created = Utc.with_ymd_and_hms(2025, 3, 4, 0, 0, 0).unwrap();
        let rent = ExpenseRecord::new("e1", Money::from_units(1500), created)
            .with_name("Rent/Mortgage")
            .recurring(RecurrenceInterval::Monthly);
        let dinner = ExpenseRecord::new("e2", Money::from_units(80), created).with_reimbursements(vec![
            ReimbursementRecord::new("r1", "e2", Money::from_units(40), created, ReimbursementStatus::Complete),
        ]);

        let output = format_expense_list(&[&rent, &dinner], "₦", "%Y-%m-%d", &Utc);
        assert!(output.contains("Rent/Mortgage"));
        assert!(output.contains("monthly"));
        assert!(output.contains("Unnamed Expense"));
        assert!(output.contains("complete"));
        assert!(output.contains("Total: ₦1,580.00"));
    }

    #[test]
    fn test_dates_follow_viewer_zone() {
        let late = Utc.with_ymd_and_hms(2025, 1, 31, 23, 30, 0).unwrap();
        let expense = ExpenseRecord::new("e1", Money::from_units(10), late);
        let plus_one = chrono::FixedOffset::east_opt(3600).unwrap();

        let output = format_expense_list(&[&expense], "₦", "%Y-%m-%d", &plus_one);
        assert!(output.contains("2025-02-01"));
        assert!(!output.contains("2025-01-31"));
    }

    #[test]
    fn test_bad_date_format_does_not_panic() {
        let created = Utc.with_ymd_and_hms(2025, 3, 4, 0, 0, 0).unwrap();
        let income = IncomeRecord::new("i1", Money::from_units(5), created);

        let output = format_income_list(&[&income], "N", "%Q", &Utc);
        assert!(output.contains("2025-03-04"));
    }

    #[test]
    fn test_empty_lists() {
        assert_eq!(format_income_list(&[], "₦", "%Y-%m-%d", &Utc), "No income recorded.\n");
        assert_eq!(format_expense_list(&[], "₦", "%Y-%m-%d", &Utc), "No expenses recorded.\n");
        assert_eq!(format_reimbursement_list(&[], "₦"), "No reimbursements recorded.\n");
    }
}
