//! Caller-owned snapshot cache with a staleness window

use std::time::Duration;

use chrono::{DateTime, Utc};

use super::source::UserDataSource;
use crate::error::{MonthwiseError, MonthwiseResult};
use crate::models::UserData;

/// Staleness window used when settings do not override it
pub const DEFAULT_STALE_AFTER: Duration = Duration::from_secs(2 * 60);

/// A snapshot together with the instant it was fetched
#[derive(Debug, Clone)]
pub struct CachedSnapshot {
    pub data: UserData,
    pub fetched_at: DateTime<Utc>,
}

/// Holds the most recent snapshot and decides when to refetch
#[derive(Debug, Clone)]
pub struct SnapshotCache {
    stale_after: Duration,
    entry: Option<CachedSnapshot>,
}

impl Default for SnapshotCache {
    fn default() -> Self {
        Self::new(DEFAULT_STALE_AFTER)
    }
}

impl SnapshotCache {
    pub fn new(stale_after: Duration) -> Self {
        Self {
            stale_after,
            entry: None,
        }
    }

    pub fn stale_after(&self) -> Duration {
        self.stale_after
    }

    /// The cached snapshot, fresh or not
    pub fn peek(&self) -> Option<&CachedSnapshot> {
        self.entry.as_ref()
    }

    /// Whether a snapshot exists and is younger than the staleness window.
    /// A fetch time in the future counts as fresh.
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        match &self.entry {
            None => false,
            Some(entry) => match (now - entry.fetched_at).to_std() {
                Ok(age) => age < self.stale_after,
                Err(_) => true,
            },
        }
    }

    /// Serve the cached snapshot while fresh, otherwise refetch it
    pub fn get_or_refresh<S>(&mut self, now: DateTime<Utc>, source: &S) -> MonthwiseResult<&UserData>
    where
        S: UserDataSource + ?Sized,
    {
        if !self.is_fresh(now) {
            return self.refresh(now, source);
        }

        tracing::trace!("serving cached snapshot");
        self.entry
            .as_ref()
            .map(|entry| &entry.data)
            .ok_or_else(|| MonthwiseError::Api("No snapshot cached".into()))
    }

    /// Fetch a new snapshot and replace the cached one.
    /// On failure the previous snapshot is left in place.
    pub fn refresh<S>(&mut self, now: DateTime<Utc>, source: &S) -> MonthwiseResult<&UserData>
    where
        S: UserDataSource + ?Sized,
    {
        let data = source.fetch_user_data().map_err(|e| {
            tracing::warn!(error = %e, "snapshot refresh failed");
            e
        })?;

        tracing::info!(
            income = data.income.len(),
            expenses = data.expenses.len(),
            budgets = data.budgets.len(),
            "refreshed snapshot"
        );

        let entry = self.entry.insert(CachedSnapshot {
            data,
            fetched_at: now,
        });
        Ok(&entry.data)
    }

    /// Force the next read to refetch
    pub fn invalidate(&mut self) {
        if self.entry.take().is_some() {
            tracing::debug!("snapshot invalidated");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IncomeRecord, Money};
    use chrono::TimeZone;
    use std::cell::Cell;

    struct CountingSource {
        calls: Cell<usize>,
        fail: bool,
    }

    impl CountingSource {
        fn new() -> Self {
            Self {
                calls: Cell::new(0),
                fail: false,
            }
        }
    }

    impl UserDataSource for CountingSource {
        fn fetch_user_data(&self) -> MonthwiseResult<UserData> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                return Err(MonthwiseError::Api("network down".into()));
            }
            let created = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
            Ok(UserData {
                income: vec![IncomeRecord::new(
                    format!("i{}", self.calls.get()),
                    Money::from_units(100),
                    created,
                )],
                ..UserData::default()
            })
        }
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_fresh_snapshot_is_reused() {
        let source = CountingSource::new();
        let mut cache = SnapshotCache::default();

        cache.get_or_refresh(t0(), &source).unwrap();
        let data = cache
            .get_or_refresh(t0() + chrono::Duration::seconds(90), &source)
            .unwrap();

        assert_eq!(data.income[0].id.as_str(), "i1");
        assert_eq!(source.calls.get(), 1);
    }

    #[test]
    fn test_stale_snapshot_is_refetched() {
        let source = CountingSource::new();
        let mut cache = SnapshotCache::new(Duration::from_secs(120));

        cache.get_or_refresh(t0(), &source).unwrap();
        let data = cache
            .get_or_refresh(t0() + chrono::Duration::seconds(120), &source)
            .unwrap();

        assert_eq!(data.income[0].id.as_str(), "i2");
        assert_eq!(source.calls.get(), 2);
    }

    #[test]
    fn test_invalidate_forces_refetch() {
        let source = CountingSource::new();
        let mut cache = SnapshotCache::default();

        cache.get_or_refresh(t0(), &source).unwrap();
        cache.invalidate();
        assert!(!cache.is_fresh(t0()));

        cache.get_or_refresh(t0(), &source).unwrap();
        assert_eq!(source.calls.get(), 2);
    }

    #[test]
    fn test_failed_refresh_keeps_previous_snapshot() {
        let mut source = CountingSource::new();
        let mut cache = SnapshotCache::default();
        cache.get_or_refresh(t0(), &source).unwrap();

        source.fail = true;
        let later = t0() + chrono::Duration::minutes(5);
        let err = cache.get_or_refresh(later, &source).unwrap_err();
        assert!(err.is_api());

        let kept = cache.peek().unwrap();
        assert_eq!(kept.fetched_at, t0());
        assert_eq!(kept.data.income[0].id.as_str(), "i1");
    }

    #[test]
    fn test_empty_cache_is_not_fresh() {
        let cache = SnapshotCache::default();
        assert!(!cache.is_fresh(t0()));
        assert!(cache.peek().is_none());
        assert_eq!(cache.stale_after(), DEFAULT_STALE_AFTER);
    }
}
