//! Dashboard summary
//!
//! One pass over a snapshot producing everything the home and profile views
//! show: this month's balance position, all-time totals with recurring
//! splits, the month's records and its budget reconciliation.

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

use super::balance::{BalanceService, BalanceSummary};
use super::budget::{find_budget, BudgetReconciliation, BudgetService, ScalarBudgetAnalysis};
use super::reimbursement::{summarize_reimbursements, ReimbursementSummary};
use super::totals::{records_in_month, RecurringSplit};
use crate::models::{ExpenseRecord, IncomeRecord, Money, MonthBucket, UserData};

/// Budget analysis for the selected month, in whichever shape the budget uses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BudgetAnalysis {
    Itemized(BudgetReconciliation),
    Scalar(ScalarBudgetAnalysis),
}

impl BudgetAnalysis {
    pub fn is_over_budget(&self) -> bool {
        match self {
            Self::Itemized(r) => r.is_over_budget(),
            Self::Scalar(s) => s.is_over_budget(),
        }
    }
}

/// Derived summary of a snapshot for one month
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub generated_at: DateTime<Utc>,
    pub bucket: MonthBucket,
    pub balance: BalanceSummary,
    pub income: RecurringSplit,
    pub expenses: RecurringSplit,
    /// All-time income - all-time expenses
    pub all_time_net: Money,
    pub month_income: Vec<IncomeRecord>,
    pub month_expenses: Vec<ExpenseRecord>,
    pub budget: Option<BudgetAnalysis>,
    pub reimbursements: Vec<ReimbursementSummary>,
}

impl DashboardSummary {
    /// Summarize the month containing `now`
    pub fn compute<Tz: TimeZone>(data: &UserData, now: DateTime<Utc>, tz: &Tz) -> Self {
        Self::for_month(data, now, MonthBucket::current(&now, tz), tz)
    }

    /// Summarize an explicitly selected month
    pub fn for_month<Tz: TimeZone>(
        data: &UserData,
        now: DateTime<Utc>,
        bucket: MonthBucket,
        tz: &Tz,
    ) -> Self {
        let balance_service = BalanceService::new(&data.income, &data.expenses, tz);
        let budget_service = BudgetService::new(&data.expenses, tz);

        let budget = find_budget(&data.budgets, bucket).and_then(|b| {
            if b.is_itemized() {
                Some(BudgetAnalysis::Itemized(budget_service.reconcile(b)))
            } else {
                budget_service
                    .analyze_scalar(b)
                    .ok()
                    .map(BudgetAnalysis::Scalar)
            }
        });

        let summary = Self {
            generated_at: now,
            bucket,
            balance: balance_service.summary(bucket),
            income: RecurringSplit::of(&data.income),
            expenses: RecurringSplit::of(&data.expenses),
            all_time_net: balance_service.all_time_net(),
            month_income: records_in_month(&data.income, bucket, tz)
                .into_iter()
                .cloned()
                .collect(),
            month_expenses: records_in_month(&data.expenses, bucket, tz)
                .into_iter()
                .cloned()
                .collect(),
            budget,
            reimbursements: summarize_reimbursements(&data.expenses),
        };

        tracing::debug!(
            bucket = %bucket,
            income = data.income.len(),
            expenses = data.expenses.len(),
            "computed dashboard summary"
        );

        summary
    }

    pub fn is_all_time_negative(&self) -> bool {
        self.all_time_net.is_negative()
    }
}
