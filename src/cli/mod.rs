//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the clap
//! argument parsing with the snapshot cache and the service layer.

pub mod check;
pub mod export;
pub mod records;
pub mod report;

use std::path::PathBuf;

use chrono::{DateTime, TimeZone, Utc};
use clap::Args;

use crate::cache::{JsonFileSource, SnapshotCache};
use crate::config::settings::Settings;
use crate::error::MonthwiseResult;
use crate::models::{MonthBucket, UserData};

pub use check::{handle_check_expense, CheckExpenseArgs};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use records::{handle_expenses_command, handle_income_command};
pub use report::{
    handle_budget_command, handle_history_command, handle_reimbursements_command,
    handle_summary_command,
};

/// Where to read the user data from and which month to show
#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    /// Exported get-user-data JSON file
    #[arg(short, long, env = "MONTHWISE_DATA_FILE")]
    pub data: PathBuf,

    /// Month to show (YYYY-MM); defaults to the current month
    #[arg(short, long)]
    pub month: Option<MonthBucket>,
}

/// Everything a handler needs besides its own arguments
pub struct CommandContext<'a, Tz: TimeZone> {
    pub settings: &'a Settings,
    pub now: DateTime<Utc>,
    pub tz: &'a Tz,
}

impl<'a, Tz: TimeZone> CommandContext<'a, Tz> {
    pub fn new(settings: &'a Settings, now: DateTime<Utc>, tz: &'a Tz) -> Self {
        Self { settings, now, tz }
    }

    /// The month selected on the command line, or the one containing `now`
    pub fn month(&self, args: &DataArgs) -> MonthBucket {
        args.month
            .unwrap_or_else(|| MonthBucket::current(&self.now, self.tz))
    }

    /// Load the snapshot named by `args` through a fresh cache
    pub fn load(&self, args: &DataArgs) -> MonthwiseResult<UserData> {
        let source = JsonFileSource::new(&args.data);
        let mut cache = SnapshotCache::new(self.settings.cache_stale_after());
        cache.get_or_refresh(self.now, &source).cloned()
    }

    pub fn symbol(&self) -> &str {
        &self.settings.currency_symbol
    }
}
