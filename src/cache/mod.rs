//! Snapshot cache for Monthwise
//!
//! The caller owns a `SnapshotCache` and passes it a `UserDataSource` on every
//! read. A snapshot is served until it goes stale or is invalidated, then the
//! whole thing is refetched.

pub mod snapshot;
pub mod source;

pub use snapshot::{CachedSnapshot, SnapshotCache, DEFAULT_STALE_AFTER};
pub use source::{JsonFileSource, StaticSource, UserDataSource};
