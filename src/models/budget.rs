//! Budget models
//!
//! A budget covers one calendar month and holds an ordered list of category
//! estimates. Older payloads carry a single scalar `amount` instead of items;
//! both shapes deserialize into `BudgetRecord`.

use serde::{Deserialize, Serialize};

use super::bucket::MonthBucket;
use super::ids::{BudgetId, BudgetItemId};
use super::money::Money;

/// Estimated spend for one category within a budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetItem {
    pub id: BudgetItemId,
    pub budget_id: BudgetId,
    pub category: String,
    #[serde(default)]
    pub estimated_amount: Money,
}

impl BudgetItem {
    /// Create a budget item
    pub fn new(
        id: impl Into<BudgetItemId>,
        budget_id: impl Into<BudgetId>,
        category: impl Into<String>,
        estimated_amount: Money,
    ) -> Self {
        Self {
            id: id.into(),
            budget_id: budget_id.into(),
            category: category.into(),
            estimated_amount,
        }
    }
}

/// A monthly budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRecord {
    pub id: BudgetId,
    pub year: i32,
    /// 1-12
    pub month: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_income: Option<Money>,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub items: Vec<BudgetItem>,
    /// Legacy single-figure budget
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,
}

impl BudgetRecord {
    /// Create an empty itemized budget for a month
    pub fn new(id: impl Into<BudgetId>, bucket: MonthBucket) -> Self {
        Self {
            id: id.into(),
            year: bucket.year,
            month: bucket.month,
            expected_income: None,
            items: Vec::new(),
            amount: None,
        }
    }

    /// Create a legacy scalar budget for a month
    pub fn scalar(id: impl Into<BudgetId>, bucket: MonthBucket, amount: Money) -> Self {
        Self {
            amount: Some(amount),
            ..Self::new(id, bucket)
        }
    }

    /// Append an item
    pub fn with_item(mut self, category: impl Into<String>, estimated_amount: Money) -> Self {
        let item = BudgetItem::new(
            BudgetItemId::draft(),
            self.id.clone(),
            category,
            estimated_amount,
        );
        self.items.push(item);
        self
    }

    /// Set the expected income
    pub fn with_expected_income(mut self, expected_income: Money) -> Self {
        self.expected_income = Some(expected_income);
        self
    }

    /// The month this budget covers
    pub fn bucket(&self) -> MonthBucket {
        MonthBucket {
            year: self.year,
            month: self.month,
        }
    }

    /// Whether the budget uses the itemized shape
    pub fn is_itemized(&self) -> bool {
        !self.items.is_empty() || self.amount.is_none()
    }
}
