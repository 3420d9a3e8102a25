//! Write payloads and the requests that carry them
//!
//! Payload field names are camelCase, matching the JSON bodies the finance
//! API accepts.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::error::{MonthwiseError, MonthwiseResult};
use crate::models::timestamp;
use crate::models::{
    ExpenseId, IncomeId, Money, RecurrenceInterval, ReimbursementId, ReimbursementStatus,
};

/// Body for creating or updating an expense
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub amount: Money,
    pub name: String,
    pub is_recurring: bool,
    #[serde(with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub expense_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence_interval: Option<RecurrenceInterval>,
    #[serde(with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub recurrence_start_date: Option<DateTime<Utc>>,
    #[serde(with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub recurrence_end_date: Option<DateTime<Utc>>,
}

/// Body for creating or updating an income entry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIncome {
    pub amount: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub is_recurring: bool,
}

/// One line of a budget body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBudgetItem {
    pub category: String,
    pub estimated_amount: Money,
}

/// Body for saving a month's budget
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    pub month: u32,
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_income: Option<Money>,
    pub items: Vec<NewBudgetItem>,
}

/// Body for recording a reimbursement
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReimbursement {
    pub amount: Money,
    #[serde(with = "timestamp")]
    pub date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub status: ReimbursementStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Post,
    Put,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// A validated write, ready to hand to a `RecordWriter`
#[derive(Debug, Clone, PartialEq)]
pub enum WriteRequest {
    CreateExpense(NewExpense),
    UpdateExpense {
        id: ExpenseId,
        payload: NewExpense,
    },
    CreateIncome(NewIncome),
    UpdateIncome {
        id: IncomeId,
        payload: NewIncome,
    },
    SaveBudget(NewBudget),
    AddReimbursement {
        expense_id: ExpenseId,
        payload: NewReimbursement,
    },
    EditReimbursement {
        expense_id: ExpenseId,
        reimbursement_id: ReimbursementId,
        payload: NewReimbursement,
    },
    DeleteIncome(IncomeId),
    DeleteExpense(ExpenseId),
    DeleteReimbursement {
        expense_id: ExpenseId,
        reimbursement_id: ReimbursementId,
    },
}

impl WriteRequest {
    /// Method and API path this request targets
    pub fn endpoint(&self) -> (HttpMethod, String) {
        match self {
            Self::CreateExpense(_) => (HttpMethod::Post, "/api/expense/create".into()),
            Self::UpdateExpense { id, .. } => {
                (HttpMethod::Put, format!("/api/expense/update/{}", id))
            }
            Self::CreateIncome(_) => (HttpMethod::Post, "/api/income/create".into()),
            Self::UpdateIncome { id, .. } => (HttpMethod::Put, format!("/api/income/update/{}", id)),
            Self::SaveBudget(_) => (HttpMethod::Post, "/api/budget/create".into()),
            Self::AddReimbursement { expense_id, .. } => (
                HttpMethod::Post,
                format!("/api/expense/{}/reimbursement", expense_id),
            ),
            Self::EditReimbursement {
                expense_id,
                reimbursement_id,
                ..
            } => (
                HttpMethod::Put,
                format!("/api/expense/{}/reimbursement/{}", expense_id, reimbursement_id),
            ),
            Self::DeleteIncome(id) => (HttpMethod::Delete, format!("/api/income/delete/{}", id)),
            Self::DeleteExpense(id) => {
                (HttpMethod::Delete, format!("/api/expense/delete/{}", id))
            }
            Self::DeleteReimbursement {
                expense_id,
                reimbursement_id,
            } => (
                HttpMethod::Delete,
                format!("/api/expense/{}/reimbursement/{}", expense_id, reimbursement_id),
            ),
        }
    }

    /// JSON body of the request; deletes carry none
    pub fn body(&self) -> MonthwiseResult<Option<serde_json::Value>> {
        let value = match self {
            Self::CreateExpense(p) | Self::UpdateExpense { payload: p, .. } => {
                serde_json::to_value(p)
            }
            Self::CreateIncome(p) | Self::UpdateIncome { payload: p, .. } => {
                serde_json::to_value(p)
            }
            Self::SaveBudget(p) => serde_json::to_value(p),
            Self::AddReimbursement { payload, .. }
            | Self::EditReimbursement { payload, .. } => serde_json::to_value(payload),
            Self::DeleteIncome(_) | Self::DeleteExpense(_) | Self::DeleteReimbursement { .. } => {
                return Ok(None);
            }
        };
        value
            .map(Some)
            .map_err(|e| MonthwiseError::Json(format!("Failed to encode request body: {}", e)))
    }

    /// Short description used in logs
    pub fn describe(&self) -> String {
        let (method, path) = self.endpoint();
        format!("{} {}", method, path)
    }
}
