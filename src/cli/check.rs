//! Expense draft validation from the command line
//!
//! Runs an expense through the same form and state machine the app uses,
//! with a writer that prints the request instead of sending it.

use clap::Args;

use crate::error::MonthwiseResult;
use crate::forms::{ExpenseDraft, ExpenseLabel, Form, RecordWriter, WriteRequest};
use crate::models::RecurrenceInterval;

#[derive(Args, Debug, Clone)]
pub struct CheckExpenseArgs {
    /// Amount as typed, e.g. "2500" or "12.50"
    #[arg(short, long)]
    pub amount: String,

    /// One of the fixed expense categories, or "Other"
    #[arg(short, long)]
    pub category: String,

    /// Free-text name, used when the category is "Other"
    #[arg(short, long)]
    pub name: Option<String>,

    /// Mark the expense as recurring
    #[arg(long)]
    pub recurring: bool,

    /// Recurrence interval for recurring expenses
    #[arg(long, value_parser = parse_interval)]
    pub interval: Option<RecurrenceInterval>,
}

fn parse_interval(s: &str) -> Result<RecurrenceInterval, String> {
    match s.to_lowercase().as_str() {
        "monthly" => Ok(RecurrenceInterval::Monthly),
        "weekly" => Ok(RecurrenceInterval::Weekly),
        "yearly" => Ok(RecurrenceInterval::Yearly),
        other => Err(format!(
            "unknown interval '{}' (expected monthly, weekly or yearly)",
            other
        )),
    }
}

/// Prints each request rather than sending it
#[derive(Debug, Default)]
pub struct DryRunWriter {
    pub written: Vec<WriteRequest>,
}

impl RecordWriter for DryRunWriter {
    fn write(&mut self, request: &WriteRequest) -> MonthwiseResult<()> {
        println!("{}", request.describe());
        if let Some(body) = request.body()? {
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        self.written.push(request.clone());
        Ok(())
    }
}

/// Build the draft described by `args`
pub fn draft_from_args(args: &CheckExpenseArgs) -> ExpenseDraft {
    let mut draft = ExpenseDraft::new(args.amount.clone(), ExpenseLabel::category(&args.category));
    if draft.label.is_other() {
        draft.label = ExpenseLabel::other(args.name.clone().unwrap_or_default());
    }
    if args.recurring {
        draft = draft.recurring(args.interval);
    }
    draft
}

/// Validate an expense draft and print the request it would send
pub fn handle_check_expense(args: &CheckExpenseArgs) -> MonthwiseResult<()> {
    let mut form = Form::new(draft_from_args(args));
    let mut writer = DryRunWriter::default();
    form.submit(&mut writer)
}
