//! Expense record model
//!
//! Expenses carry an optional explicit date. When present it decides the
//! month bucket; otherwise the creation timestamp does.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::bucket::MonthBucket;
use super::ids::ExpenseId;
use super::money::Money;
use super::reimbursement::ReimbursementRecord;
use super::timestamp;

/// Category label used when an expense has no name
pub const OTHER_CATEGORY: &str = "Other";

/// Label shown for an expense without a name
pub const UNNAMED_EXPENSE: &str = "Unnamed Expense";

/// How often a recurring expense repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceInterval {
    Monthly,
    Weekly,
    Yearly,
}

impl fmt::Display for RecurrenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "monthly"),
            Self::Weekly => write!(f, "weekly"),
            Self::Yearly => write!(f, "yearly"),
        }
    }
}

/// An expense entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    pub id: ExpenseId,
    pub amount: Money,

    /// Doubles as the category label for budget reconciliation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub is_recurring: bool,

    #[serde(
        default,
        with = "timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub expense_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence_interval: Option<RecurrenceInterval>,

    #[serde(
        default,
        with = "timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub recurrence_start_date: Option<DateTime<Utc>>,

    #[serde(
        default,
        with = "timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub recurrence_end_date: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub reimbursements: Vec<ReimbursementRecord>,

    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,

    #[serde(
        default,
        with = "timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ExpenseRecord {
    /// Create an expense record
    pub fn new(id: impl Into<ExpenseId>, amount: Money, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            amount,
            name: None,
            is_recurring: false,
            expense_date: None,
            recurrence_interval: None,
            recurrence_start_date: None,
            recurrence_end_date: None,
            reimbursements: Vec::new(),
            created_at,
            updated_at: None,
        }
    }

    /// Set the name / category label
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set an explicit expense date
    pub fn with_expense_date(mut self, date: DateTime<Utc>) -> Self {
        self.expense_date = Some(date);
        self
    }

    /// Mark as recurring with the given interval
    pub fn recurring(mut self, interval: RecurrenceInterval) -> Self {
        self.is_recurring = true;
        self.recurrence_interval = Some(interval);
        self
    }

    /// Attach reimbursement entries
    pub fn with_reimbursements(mut self, reimbursements: Vec<ReimbursementRecord>) -> Self {
        self.reimbursements = reimbursements;
        self
    }

    /// The date that decides the month bucket
    pub fn effective_date(&self) -> DateTime<Utc> {
        self.expense_date.unwrap_or(self.created_at)
    }

    /// The month this expense counts toward
    pub fn bucket<Tz: TimeZone>(&self, tz: &Tz) -> MonthBucket {
        MonthBucket::from_datetime(&self.effective_date(), tz)
    }

    /// Category used for budget grouping, "Other" when unnamed
    pub fn category_label(&self) -> &str {
        match self.name.as_deref() {
            Some(n) if !n.is_empty() => n,
            _ => OTHER_CATEGORY,
        }
    }

    /// Name for display, "Unnamed Expense" when unnamed
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(n) if !n.is_empty() => n,
            _ => UNNAMED_EXPENSE,
        }
    }
}
