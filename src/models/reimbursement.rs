//! Reimbursement model
//!
//! Money paid back against an expense. Each entry carries its own status;
//! the expense-level status is derived in `services::reimbursement`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{ExpenseId, ReimbursementId};
use super::money::Money;
use super::timestamp;

/// Status recorded on a single reimbursement entry
///
/// The API stores this as a free string. Only the exact value "complete"
/// counts as complete; anything else reads as partial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ReimbursementStatus {
    #[default]
    Partial,
    Complete,
}

impl From<String> for ReimbursementStatus {
    fn from(raw: String) -> Self {
        if raw == "complete" {
            Self::Complete
        } else {
            Self::Partial
        }
    }
}

impl fmt::Display for ReimbursementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Partial => write!(f, "partial"),
            Self::Complete => write!(f, "complete"),
        }
    }
}

/// A reimbursement recorded against an expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReimbursementRecord {
    pub id: ReimbursementId,
    pub expense_id: ExpenseId,
    pub amount: Money,
    #[serde(with = "timestamp")]
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub status: ReimbursementStatus,
}

impl ReimbursementRecord {
    /// Create a reimbursement entry
    pub fn new(
        id: impl Into<ReimbursementId>,
        expense_id: impl Into<ExpenseId>,
        amount: Money,
        date: DateTime<Utc>,
        status: ReimbursementStatus,
    ) -> Self {
        Self {
            id: id.into(),
            expense_id: expense_id.into(),
            amount,
            date,
            note: None,
            status,
        }
    }

    /// Attach a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn is_complete(&self) -> bool {
        self.status == ReimbursementStatus::Complete
    }
}
