//! Period totals
//!
//! Summation primitives shared by every view: current-month totals, all-time
//! totals and recurring subtotals all reduce to `sum_amounts` with a different
//! predicate.

use chrono::TimeZone;
use serde::Serialize;

use crate::models::{ExpenseRecord, IncomeRecord, Money, MonthBucket};

/// A record that contributes an amount to a calendar month
pub trait BucketedRecord {
    fn amount(&self) -> Money;
    fn is_recurring(&self) -> bool;
    fn bucket<Tz: TimeZone>(&self, tz: &Tz) -> MonthBucket;
}

impl BucketedRecord for IncomeRecord {
    fn amount(&self) -> Money {
        self.amount
    }

    fn is_recurring(&self) -> bool {
        self.is_recurring
    }

    fn bucket<Tz: TimeZone>(&self, tz: &Tz) -> MonthBucket {
        IncomeRecord::bucket(self, tz)
    }
}

impl BucketedRecord for ExpenseRecord {
    fn amount(&self) -> Money {
        self.amount
    }

    fn is_recurring(&self) -> bool {
        self.is_recurring
    }

    fn bucket<Tz: TimeZone>(&self, tz: &Tz) -> MonthBucket {
        ExpenseRecord::bucket(self, tz)
    }
}

/// Sum the amounts of every record matching `predicate`; zero for no matches
pub fn sum_amounts<R, F>(records: &[R], predicate: F) -> Money
where
    R: BucketedRecord,
    F: Fn(&R) -> bool,
{
    records
        .iter()
        .filter(|r| predicate(r))
        .map(BucketedRecord::amount)
        .sum()
}

/// Total of records in `bucket`
pub fn month_total<R: BucketedRecord, Tz: TimeZone>(
    records: &[R],
    bucket: MonthBucket,
    tz: &Tz,
) -> Money {
    sum_amounts(records, |r| r.bucket(tz) == bucket)
}

/// Total of records in months strictly before `bucket`
pub fn total_before<R: BucketedRecord, Tz: TimeZone>(
    records: &[R],
    bucket: MonthBucket,
    tz: &Tz,
) -> Money {
    sum_amounts(records, |r| r.bucket(tz) < bucket)
}

/// Total over every record
pub fn all_time_total<R: BucketedRecord>(records: &[R]) -> Money {
    sum_amounts(records, |_| true)
}

/// Total over recurring records, all-time
pub fn recurring_total<R: BucketedRecord>(records: &[R]) -> Money {
    sum_amounts(records, |r| r.is_recurring())
}

/// Records in `bucket`, in input order
pub fn records_in_month<'a, R: BucketedRecord, Tz: TimeZone>(
    records: &'a [R],
    bucket: MonthBucket,
    tz: &Tz,
) -> Vec<&'a R> {
    records.iter().filter(|r| r.bucket(tz) == bucket).collect()
}

/// All-time total split by the recurring flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecurringSplit {
    pub total: Money,
    pub recurring: Money,
    pub one_time: Money,
}

impl RecurringSplit {
    pub fn of<R: BucketedRecord>(records: &[R]) -> Self {
        let total = all_time_total(records);
        let recurring = recurring_total(records);
        Self {
            total,
            recurring,
            one_time: total - recurring,
        }
    }
}
