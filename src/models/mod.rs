//! Core data models for Monthwise
//!
//! Record shapes as served by the finance API (income, expenses,
//! reimbursements, budgets), plus the value types the aggregator works in:
//! `Money` and `MonthBucket`.

pub mod bucket;
pub mod budget;
pub mod expense;
pub mod ids;
pub mod income;
pub mod money;
pub mod reimbursement;
pub mod timestamp;
pub mod user;

pub use bucket::{month_name, recent_months, year_range, BucketParseError, MonthBucket};
pub use budget::{BudgetItem, BudgetRecord};
pub use expense::{ExpenseRecord, RecurrenceInterval, OTHER_CATEGORY, UNNAMED_EXPENSE};
pub use ids::{BudgetId, BudgetItemId, ExpenseId, IncomeId, ReimbursementId, UserId};
pub use income::{IncomeRecord, UNNAMED_SOURCE};
pub use money::{Money, MoneyParseError, DEFAULT_CURRENCY_SYMBOL};
pub use reimbursement::{ReimbursementRecord, ReimbursementStatus};
pub use user::{UserData, UserProfile};

/// Read a JSON `null` or missing list as empty
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    let value: Option<Vec<T>> = serde::Deserialize::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
