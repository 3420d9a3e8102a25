//! Monthwise - month-by-month money summaries
//!
//! This library turns a user's income, expense, budget and reimbursement
//! records into calendar-month views: rolling balances, budget-vs-actual
//! reconciliation, reimbursement progress and dashboard totals. It also
//! carries the add/edit form logic that produces write requests for the
//! backing API.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (income, expenses, budgets, month buckets)
//! - `cache`: Snapshot cache in front of the user-data source
//! - `services`: Aggregation and reconciliation logic
//! - `forms`: Draft validation and the submit state machine
//! - `display`, `reports`, `export`: Terminal tables, reports and file export
//! - `cli`: Command handlers used by the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use monthwise::config::{paths::MonthwisePaths, settings::Settings};
//!
//! let paths = MonthwisePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod cache;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod forms;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{MonthwiseError, MonthwiseResult};

use std::sync::Once;

static TRACING: Once = Once::new();

/// Install the stderr tracing subscriber once per process
///
/// Honors `RUST_LOG`; defaults to warnings from this crate only.
pub fn init_tracing() {
    TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("monthwise=warn"));
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
