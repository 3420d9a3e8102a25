//! Summary, budget, history and reimbursement commands

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use chrono::TimeZone;

use super::{CommandContext, DataArgs};
use crate::display::format_reimbursement_list;
use crate::error::{MonthwiseError, MonthwiseResult};
use crate::reports::{BudgetReconciliationReport, DashboardReport, MonthlyHistoryReport};
use crate::services::{find_budget, summarize_reimbursements, BudgetService, DashboardSummary};

fn create_output(path: &Path) -> MonthwiseResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        MonthwiseError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

/// Print the dashboard for the selected month
pub fn handle_summary_command<Tz: TimeZone>(
    ctx: &CommandContext<'_, Tz>,
    args: &DataArgs,
) -> MonthwiseResult<()> {
    let data = ctx.load(args)?;
    let summary = DashboardSummary::for_month(&data, ctx.now, ctx.month(args), ctx.tz);

    print!(
        "{}",
        DashboardReport::new(&summary, data.user.as_ref()).format_terminal(ctx.symbol())
    );
    Ok(())
}

/// Print the budget reconciliation, optionally writing it to CSV
pub fn handle_budget_command<Tz: TimeZone>(
    ctx: &CommandContext<'_, Tz>,
    args: &DataArgs,
    output: Option<PathBuf>,
) -> MonthwiseResult<()> {
    let data = ctx.load(args)?;
    let bucket = ctx.month(args);

    let budget = find_budget(&data.budgets, bucket)
        .ok_or_else(|| MonthwiseError::budget_not_found(bucket.to_string()))?;

    if !budget.is_itemized() {
        let analysis = BudgetService::new(&data.expenses, ctx.tz).analyze_scalar(budget)?;
        println!("Budget for {}", bucket.label());
        println!("  Budgeted: {}", analysis.budget_amount.format_with_symbol(ctx.symbol()));
        println!("  Spent:    {}", analysis.total_expenses.format_with_symbol(ctx.symbol()));
        println!(
            "  {}: {}",
            if analysis.is_over_budget() { "Over" } else { "Left" },
            analysis.difference.abs().format_with_symbol(ctx.symbol())
        );
        return Ok(());
    }

    let report = BudgetReconciliationReport::generate(&data.budgets, &data.expenses, bucket, ctx.tz)?;
    print!("{}", report.format_terminal(ctx.symbol()));

    if let Some(path) = output {
        report.export_csv(create_output(&path)?)?;
        println!("\nReconciliation exported to: {}", path.display());
    }
    Ok(())
}

/// Print the month-by-month balance history, optionally writing it to CSV
pub fn handle_history_command<Tz: TimeZone>(
    ctx: &CommandContext<'_, Tz>,
    args: &DataArgs,
    output: Option<PathBuf>,
) -> MonthwiseResult<()> {
    let data = ctx.load(args)?;
    let report = MonthlyHistoryReport::generate(&data.income, &data.expenses, ctx.tz);
    print!("{}", report.format_terminal(ctx.symbol()));

    if let Some(path) = output {
        report.export_csv(create_output(&path)?)?;
        println!("\nHistory exported to: {}", path.display());
    }
    Ok(())
}

/// Print reimbursement status for every expense that has entries
pub fn handle_reimbursements_command<Tz: TimeZone>(
    ctx: &CommandContext<'_, Tz>,
    args: &DataArgs,
) -> MonthwiseResult<()> {
    let data = ctx.load(args)?;
    let summaries = summarize_reimbursements(&data.expenses);
    print!("{}", format_reimbursement_list(&summaries, ctx.symbol()));
    Ok(())
}
