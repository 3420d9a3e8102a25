//! Budget service
//!
//! Reconciles a month's budget against what was actually spent. Expenses in
//! the target month are grouped by their category label, and each budget item
//! picks up the group matching its category exactly.

use std::collections::BTreeMap;

use chrono::TimeZone;
use serde::Serialize;

use super::totals::month_total;
use crate::error::{MonthwiseError, MonthwiseResult};
use crate::models::{BudgetItemId, BudgetRecord, ExpenseRecord, Money, MonthBucket};

/// Estimated vs actual for one budget item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReconciliationRow {
    pub item_id: BudgetItemId,
    pub category: String,
    pub estimated: Money,
    pub actual: Money,
    /// estimated - actual; negative means over budget
    pub difference: Money,
}

impl ReconciliationRow {
    pub fn is_over_budget(&self) -> bool {
        self.difference.is_negative()
    }
}

/// Spend in a category that no budget item covers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnbudgetedSpend {
    pub category: String,
    pub actual: Money,
}

/// Full reconciliation of an itemized budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetReconciliation {
    pub bucket: MonthBucket,
    pub rows: Vec<ReconciliationRow>,
    pub total_estimated: Money,
    /// Sum of per-item actuals; unbudgeted spend is not included
    pub total_actual: Money,
    pub total_difference: Money,
    pub expected_income: Option<Money>,
    pub unbudgeted: Vec<UnbudgetedSpend>,
}

impl BudgetReconciliation {
    pub fn is_over_budget(&self) -> bool {
        self.total_difference.is_negative()
    }

    /// Expected income left after every estimate, when income is set
    pub fn unallocated_income(&self) -> Option<Money> {
        self.expected_income.map(|income| income - self.total_estimated)
    }

    pub fn over_budget_rows(&self) -> Vec<&ReconciliationRow> {
        self.rows.iter().filter(|r| r.is_over_budget()).collect()
    }
}

/// Legacy single-figure budget vs the month's total spend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScalarBudgetAnalysis {
    pub bucket: MonthBucket,
    pub budget_amount: Money,
    pub total_expenses: Money,
    /// budget_amount - total_expenses; negative means over budget
    pub difference: Money,
}

impl ScalarBudgetAnalysis {
    pub fn is_over_budget(&self) -> bool {
        self.difference.is_negative()
    }
}

/// Group expenses in `bucket` by category label, summing amounts
pub fn actual_by_category<Tz: TimeZone>(
    expenses: &[ExpenseRecord],
    bucket: MonthBucket,
    tz: &Tz,
) -> BTreeMap<String, Money> {
    let mut grouped: BTreeMap<String, Money> = BTreeMap::new();
    for expense in expenses.iter().filter(|e| e.bucket(tz) == bucket) {
        *grouped
            .entry(expense.category_label().to_string())
            .or_default() += expense.amount;
    }
    grouped
}

/// Find the budget covering `bucket`
pub fn find_budget(budgets: &[BudgetRecord], bucket: MonthBucket) -> Option<&BudgetRecord> {
    budgets.iter().find(|b| b.bucket() == bucket)
}

/// Service for reconciling budgets against expenses
pub struct BudgetService<'a, Tz: TimeZone> {
    expenses: &'a [ExpenseRecord],
    tz: &'a Tz,
}

impl<'a, Tz: TimeZone> BudgetService<'a, Tz> {
    /// Create a new budget service
    pub fn new(expenses: &'a [ExpenseRecord], tz: &'a Tz) -> Self {
        Self { expenses, tz }
    }

    /// Reconcile an itemized budget for its own month
    pub fn reconcile(&self, budget: &BudgetRecord) -> BudgetReconciliation {
        let bucket = budget.bucket();
        let grouped = actual_by_category(self.expenses, bucket, self.tz);

        let rows: Vec<ReconciliationRow> = budget
            .items
            .iter()
            .map(|item| {
                let actual = grouped.get(&item.category).copied().unwrap_or_default();
                ReconciliationRow {
                    item_id: item.id.clone(),
                    category: item.category.clone(),
                    estimated: item.estimated_amount,
                    actual,
                    difference: item.estimated_amount - actual,
                }
            })
            .collect();

        let total_estimated: Money = rows.iter().map(|r| r.estimated).sum();
        let total_actual: Money = rows.iter().map(|r| r.actual).sum();

        let unbudgeted = grouped
            .into_iter()
            .filter(|(category, _)| !budget.items.iter().any(|i| &i.category == category))
            .map(|(category, actual)| UnbudgetedSpend { category, actual })
            .collect();

        tracing::debug!(
            bucket = %bucket,
            items = rows.len(),
            "reconciled budget"
        );

        BudgetReconciliation {
            bucket,
            rows,
            total_estimated,
            total_actual,
            total_difference: total_estimated - total_actual,
            expected_income: budget.expected_income,
            unbudgeted,
        }
    }

    /// Reconcile a legacy scalar budget
    pub fn analyze_scalar(&self, budget: &BudgetRecord) -> MonthwiseResult<ScalarBudgetAnalysis> {
        let budget_amount = budget.amount.ok_or_else(|| {
            MonthwiseError::Validation(format!(
                "Budget for {} has no single amount",
                budget.bucket()
            ))
        })?;
        let bucket = budget.bucket();
        let total_expenses = month_total(self.expenses, bucket, self.tz);

        Ok(ScalarBudgetAnalysis {
            bucket,
            budget_amount,
            total_expenses,
            difference: budget_amount - total_expenses,
        })
    }

    /// Reconcile whichever budget covers `bucket`
    pub fn reconcile_month(
        &self,
        budgets: &[BudgetRecord],
        bucket: MonthBucket,
    ) -> MonthwiseResult<BudgetReconciliation> {
        find_budget(budgets, bucket)
            .map(|b| self.reconcile(b))
            .ok_or_else(|| MonthwiseError::budget_not_found(bucket.to_string()))
    }
}
