//! Income and expense listing commands

use chrono::TimeZone;

use super::{CommandContext, DataArgs};
use crate::display::{format_expense_list, format_income_list};
use crate::error::MonthwiseResult;
use crate::services::records_in_month;

/// List the income recorded in the selected month
pub fn handle_income_command<Tz: TimeZone>(
    ctx: &CommandContext<'_, Tz>,
    args: &DataArgs,
) -> MonthwiseResult<()> {
    let data = ctx.load(args)?;
    let bucket = ctx.month(args);
    let records = records_in_month(&data.income, bucket, ctx.tz);

    println!("Income - {}", bucket.label());
    print!(
        "{}",
        format_income_list(&records, ctx.symbol(), &ctx.settings.date_format, ctx.tz)
    );
    Ok(())
}

/// List the expenses recorded in the selected month
pub fn handle_expenses_command<Tz: TimeZone>(
    ctx: &CommandContext<'_, Tz>,
    args: &DataArgs,
) -> MonthwiseResult<()> {
    let data = ctx.load(args)?;
    let bucket = ctx.month(args);
    let records = records_in_month(&data.expenses, bucket, ctx.tz);

    println!("Expenses - {}", bucket.label());
    print!(
        "{}",
        format_expense_list(&records, ctx.symbol(), &ctx.settings.date_format, ctx.tz)
    );
    Ok(())
}
