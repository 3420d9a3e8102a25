//! Dashboard Report
//!
//! Terminal rendering of a `DashboardSummary`: the month's balance position,
//! all-time totals and a one-line budget status.

use crate::display::{double_separator, format_balance, format_money, separator};
use crate::models::UserProfile;
use crate::services::{BudgetAnalysis, DashboardSummary, DerivedReimbursementStatus};

/// Dashboard summary with the profile it belongs to
#[derive(Debug, Clone)]
pub struct DashboardReport<'a> {
    pub summary: &'a DashboardSummary,
    pub user: Option<&'a UserProfile>,
}

impl<'a> DashboardReport<'a> {
    pub fn new(summary: &'a DashboardSummary, user: Option<&'a UserProfile>) -> Self {
        Self { summary, user }
    }

    fn budget_line(&self, symbol: &str) -> String {
        match &self.summary.budget {
            None => "No budget set for this month".to_string(),
            Some(BudgetAnalysis::Itemized(rec)) => format!(
                "{} estimated, {} spent on budget lines, {} {}",
                format_money(rec.total_estimated, symbol),
                format_money(rec.total_actual, symbol),
                format_money(rec.total_difference.abs(), symbol),
                if rec.is_over_budget() { "over" } else { "left" }
            ),
            Some(BudgetAnalysis::Scalar(s)) => format!(
                "{} budgeted, {} spent, {} {}",
                format_money(s.budget_amount, symbol),
                format_money(s.total_expenses, symbol),
                format_money(s.difference.abs(), symbol),
                if s.is_over_budget() { "over" } else { "left" }
            ),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let s = self.summary;
        let mut output = String::new();

        match self.user {
            Some(user) => output.push_str(&format!(
                "Summary for {} - {}\n",
                user.display_name(),
                s.bucket.label()
            )),
            None => output.push_str(&format!("Summary - {}\n", s.bucket.label())),
        }
        output.push_str(&double_separator(56));
        output.push('\n');

        output.push_str(&format!(
            "{:<28} {:>20}\n",
            "Carried over",
            format_balance(s.balance.rollover, symbol)
        ));
        output.push_str(&format!(
            "{:<28} {:>20}\n",
            "Income this month",
            format_money(s.balance.month_income, symbol)
        ));
        output.push_str(&format!(
            "{:<28} {:>20}\n",
            "Expenses this month",
            format_money(s.balance.month_expenses, symbol)
        ));
        output.push_str(&separator(56));
        output.push('\n');
        output.push_str(&format!(
            "{:<28} {:>20}\n\n",
            "Current balance",
            format_balance(s.balance.current_balance, symbol)
        ));

        output.push_str("All time\n");
        output.push_str(&format!(
            "  {:<26} {:>20}\n",
            "Income",
            format_money(s.income.total, symbol)
        ));
        output.push_str(&format!(
            "    {:<24} {:>20}\n",
            "recurring",
            format_money(s.income.recurring, symbol)
        ));
        output.push_str(&format!(
            "  {:<26} {:>20}\n",
            "Expenses",
            format_money(s.expenses.total, symbol)
        ));
        output.push_str(&format!(
            "    {:<24} {:>20}\n",
            "recurring",
            format_money(s.expenses.recurring, symbol)
        ));
        output.push_str(&format!(
            "  {:<26} {:>20}\n\n",
            "Net",
            format_balance(s.all_time_net, symbol)
        ));

        output.push_str(&format!("Budget: {}\n", self.budget_line(symbol)));

        let open = s
            .reimbursements
            .iter()
            .filter(|r| r.status != DerivedReimbursementStatus::Complete)
            .count();
        if open > 0 {
            output.push_str(&format!("Reimbursements still open: {}\n", open));
        }

        if s.balance.is_negative() || s.is_all_time_negative() {
            output.push_str("\n* = Negative balance\n");
        }

        output
    }
}
