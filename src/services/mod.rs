//! Service layer for Monthwise
//!
//! Pure aggregation over a user-data snapshot. Every function takes the raw
//! record slices plus a time zone and returns derived values; nothing here
//! holds state between calls.

pub mod balance;
pub mod budget;
pub mod reimbursement;
pub mod summary;
pub mod totals;

pub use balance::{BalanceService, BalanceSummary, MonthlyBalance};
pub use budget::{
    actual_by_category, find_budget, BudgetReconciliation, BudgetService, ReconciliationRow,
    ScalarBudgetAnalysis, UnbudgetedSpend,
};
pub use reimbursement::{
    summarize_reimbursements, total_outstanding, DerivedReimbursementStatus, ReimbursementSummary,
};
pub use summary::{BudgetAnalysis, DashboardSummary};
pub use totals::{
    all_time_total, month_total, records_in_month, recurring_total, sum_amounts, total_before,
    BucketedRecord, RecurringSplit,
};
