//! User profile and the user-data snapshot
//!
//! `UserData` mirrors the payload of the API's `get-user-data` endpoint: every
//! record the signed-in user owns, fetched in one call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::budget::BudgetRecord;
use super::expense::{ExpenseRecord, OTHER_CATEGORY};
use super::ids::{ExpenseId, UserId};
use super::income::IncomeRecord;
use super::timestamp;
use crate::error::{MonthwiseError, MonthwiseResult};

/// The signed-in user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(
        default,
        with = "timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl UserProfile {
    /// "First Last" when either name is set, otherwise the email
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if parts.is_empty() {
            self.email.clone()
        } else {
            parts.join(" ")
        }
    }
}

/// Everything the aggregator reads, as one immutable snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub income: Vec<IncomeRecord>,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub expenses: Vec<ExpenseRecord>,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub budgets: Vec<BudgetRecord>,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

impl UserData {
    /// Parse a `get-user-data` JSON document
    pub fn from_json(json: &str) -> MonthwiseResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| MonthwiseError::Json(format!("Failed to parse user data: {}", e)))
    }

    /// Look up an expense by ID
    pub fn expense(&self, id: &ExpenseId) -> MonthwiseResult<&ExpenseRecord> {
        self.expenses
            .iter()
            .find(|e| &e.id == id)
            .ok_or_else(|| MonthwiseError::expense_not_found(id.as_str()))
    }

    /// Distinct expense categories in first-seen order
    pub fn expense_categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for expense in &self.expenses {
            let label = expense.category_label();
            if !seen.contains(&label) {
                seen.push(label);
            }
        }
        seen
    }

    pub fn is_empty(&self) -> bool {
        self.income.is_empty() && self.expenses.is_empty() && self.budgets.is_empty()
    }

    /// Whether any expense falls back to the "Other" category
    pub fn has_uncategorized_expenses(&self) -> bool {
        self.expenses
            .iter()
            .any(|e| e.category_label() == OTHER_CATEGORY)
    }
}
