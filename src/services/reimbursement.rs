//! Reimbursement service
//!
//! Derives an expense-level reimbursement status from the entries recorded
//! against it.

use serde::Serialize;
use std::fmt;

use crate::models::{ExpenseId, ExpenseRecord, Money, ReimbursementRecord};

/// Reimbursement status of a whole expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DerivedReimbursementStatus {
    /// No reimbursement recorded
    None,
    /// At least one entry is not complete
    Partial,
    /// Every entry is complete
    Complete,
}

impl DerivedReimbursementStatus {
    /// Derive the status from the entries on an expense
    pub fn derive(entries: &[ReimbursementRecord]) -> Self {
        if entries.is_empty() {
            Self::None
        } else if entries.iter().all(ReimbursementRecord::is_complete) {
            Self::Complete
        } else {
            Self::Partial
        }
    }
}

impl fmt::Display for DerivedReimbursementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Partial => write!(f, "partial"),
            Self::Complete => write!(f, "complete"),
        }
    }
}

/// Reimbursement position of one expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReimbursementSummary {
    pub expense_id: ExpenseId,
    pub expense_name: String,
    pub expense_amount: Money,
    pub status: DerivedReimbursementStatus,
    pub entry_count: usize,
    pub total_reimbursed: Money,
    /// expense amount - total reimbursed; negative when over-reimbursed
    pub outstanding: Money,
}

impl ReimbursementSummary {
    /// Summarize the entries attached to `expense`
    pub fn for_expense(expense: &ExpenseRecord) -> Self {
        Self::from_entries(expense, &expense.reimbursements)
    }

    /// Summarize `expense` against entries fetched separately
    pub fn from_entries(expense: &ExpenseRecord, entries: &[ReimbursementRecord]) -> Self {
        let total_reimbursed: Money = entries.iter().map(|r| r.amount).sum();

        Self {
            expense_id: expense.id.clone(),
            expense_name: expense.display_name().to_string(),
            expense_amount: expense.amount,
            status: DerivedReimbursementStatus::derive(entries),
            entry_count: entries.len(),
            total_reimbursed,
            outstanding: expense.amount - total_reimbursed,
        }
    }

    pub fn is_over_reimbursed(&self) -> bool {
        self.outstanding.is_negative()
    }
}

/// Summaries for every expense that has at least one reimbursement entry,
/// in input order
pub fn summarize_reimbursements(expenses: &[ExpenseRecord]) -> Vec<ReimbursementSummary> {
    expenses
        .iter()
        .filter(|e| !e.reimbursements.is_empty())
        .map(ReimbursementSummary::for_expense)
        .collect()
}

/// Outstanding total across summaries
pub fn total_outstanding(summaries: &[ReimbursementSummary]) -> Money {
    summaries.iter().map(|s| s.outstanding).sum()
}
