//! Balance service
//!
//! Computes the rollover carried into the current month and the resulting
//! current balance, plus the month-by-month history that rollover is a prefix
//! sum of.

use std::collections::BTreeMap;

use chrono::TimeZone;
use serde::Serialize;

use super::totals::{month_total, total_before};
use crate::models::{ExpenseRecord, IncomeRecord, Money, MonthBucket};

/// Balance position for one month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BalanceSummary {
    pub bucket: MonthBucket,
    /// Net of every month before `bucket`
    pub rollover: Money,
    pub month_income: Money,
    pub month_expenses: Money,
    /// rollover + month_income - month_expenses
    pub current_balance: Money,
}

impl BalanceSummary {
    /// A negative balance is shown flagged, never clamped
    pub fn is_negative(&self) -> bool {
        self.current_balance.is_negative()
    }

    pub fn month_net(&self) -> Money {
        self.month_income - self.month_expenses
    }
}

/// One row of the monthly history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyBalance {
    pub bucket: MonthBucket,
    pub opening: Money,
    pub income: Money,
    pub expenses: Money,
    pub closing: Money,
}

/// Service for balance computations over a snapshot
pub struct BalanceService<'a, Tz: TimeZone> {
    income: &'a [IncomeRecord],
    expenses: &'a [ExpenseRecord],
    tz: &'a Tz,
}

impl<'a, Tz: TimeZone> BalanceService<'a, Tz> {
    /// Create a new balance service
    pub fn new(income: &'a [IncomeRecord], expenses: &'a [ExpenseRecord], tz: &'a Tz) -> Self {
        Self {
            income,
            expenses,
            tz,
        }
    }

    /// Net of every month strictly before `bucket`
    pub fn rollover(&self, bucket: MonthBucket) -> Money {
        total_before(self.income, bucket, self.tz) - total_before(self.expenses, bucket, self.tz)
    }

    /// Rollover, month totals and current balance for `bucket`
    pub fn summary(&self, bucket: MonthBucket) -> BalanceSummary {
        let rollover = self.rollover(bucket);
        let month_income = month_total(self.income, bucket, self.tz);
        let month_expenses = month_total(self.expenses, bucket, self.tz);

        BalanceSummary {
            bucket,
            rollover,
            month_income,
            month_expenses,
            current_balance: rollover + month_income - month_expenses,
        }
    }

    /// Income minus expenses over every record
    pub fn all_time_net(&self) -> Money {
        let income: Money = self.income.iter().map(|r| r.amount).sum();
        let expenses: Money = self.expenses.iter().map(|r| r.amount).sum();
        income - expenses
    }

    /// One row per month that has any record, oldest first
    ///
    /// Each row opens with the previous row's closing balance, so the opening
    /// of any month equals `rollover` for that month.
    pub fn monthly_history(&self) -> Vec<MonthlyBalance> {
        let mut months: BTreeMap<MonthBucket, (Money, Money)> = BTreeMap::new();

        for record in self.income {
            months.entry(record.bucket(self.tz)).or_default().0 += record.amount;
        }
        for record in self.expenses {
            months.entry(record.bucket(self.tz)).or_default().1 += record.amount;
        }

        let mut running = Money::zero();
        months
            .into_iter()
            .map(|(bucket, (income, expenses))| {
                let opening = running;
                running = opening + income - expenses;
                MonthlyBalance {
                    bucket,
                    opening,
                    income,
                    expenses,
                    closing: running,
                }
            })
            .collect()
    }
}
