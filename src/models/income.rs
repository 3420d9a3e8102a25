//! Income record model
//!
//! An income entry as served by the API. Income is bucketed by its creation
//! timestamp.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::bucket::MonthBucket;
use super::ids::IncomeId;
use super::money::Money;
use super::timestamp;

/// Label shown for income without a source
pub const UNNAMED_SOURCE: &str = "Unnamed Source";

/// An income entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeRecord {
    pub id: IncomeId,
    pub amount: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(
        default,
        with = "timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

impl IncomeRecord {
    /// Create an income record
    pub fn new(id: impl Into<IncomeId>, amount: Money, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            amount,
            source: None,
            is_recurring: false,
            created_at,
            updated_at: None,
        }
    }

    /// Set the source label
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Mark as recurring
    pub fn recurring(mut self) -> Self {
        self.is_recurring = true;
        self
    }

    /// Source for display, falling back to "Unnamed Source"
    pub fn display_source(&self) -> &str {
        match self.source.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => UNNAMED_SOURCE,
        }
    }

    /// The month this income counts toward
    pub fn bucket<Tz: TimeZone>(&self, tz: &Tz) -> MonthBucket {
        MonthBucket::from_datetime(&self.created_at, tz)
    }
}
