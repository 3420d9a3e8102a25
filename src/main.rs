use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, TimeZone, Utc};
use clap::{Parser, Subcommand};

use monthwise::cli::{
    handle_budget_command, handle_check_expense, handle_expenses_command, handle_export_command,
    handle_history_command, handle_income_command, handle_reimbursements_command,
    handle_summary_command, CheckExpenseArgs, CommandContext, DataArgs, ExportArgs,
};
use monthwise::config::{paths::MonthwisePaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "monthwise",
    version,
    about = "Month-by-month income, expense and budget summaries",
    long_about = "Monthwise reads an exported snapshot of your income, expenses, \
                  budgets and reimbursements and shows where each calendar month \
                  stands: carried-over balance, budget vs actual and what is still \
                  owed back to you."
)]
struct Cli {
    /// Bucket records by UTC instead of the local time zone
    #[arg(long, global = true)]
    utc: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Dashboard for a month: balance, totals and budget status
    #[command(alias = "dash")]
    Summary(DataArgs),

    /// List income recorded in a month
    Income(DataArgs),

    /// List expenses recorded in a month
    Expenses(DataArgs),

    /// Budget vs actual for a month
    Budget {
        #[command(flatten)]
        data: DataArgs,
        /// Write the reconciliation as CSV to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Reimbursement progress per expense
    Reimbursements(DataArgs),

    /// Month-by-month rolling balance
    History {
        #[command(flatten)]
        data: DataArgs,
        /// Write the history as CSV to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the summary or the raw records
    Export(ExportArgs),

    /// Validate an expense as the add form would and print the request
    CheckExpense(CheckExpenseArgs),

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn show_config(paths: &MonthwisePaths, settings: &Settings) {
    println!("Monthwise Configuration");
    println!("=======================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Export directory: {}", paths.export_dir().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol:   {}", settings.currency_symbol);
    println!("  Date format:       {}", settings.date_format);
    println!("  Cache stale after: {} min", settings.cache_stale_minutes);
    if let Some(url) = &settings.api_base_url {
        println!("  API base URL:      {}", url);
    }
}

fn run<Tz: TimeZone>(
    command: Commands,
    paths: &MonthwisePaths,
    settings: &Settings,
    tz: &Tz,
) -> Result<()> {
    let ctx = CommandContext::new(settings, Utc::now(), tz);

    match command {
        Commands::Summary(args) => handle_summary_command(&ctx, &args)?,
        Commands::Income(args) => handle_income_command(&ctx, &args)?,
        Commands::Expenses(args) => handle_expenses_command(&ctx, &args)?,
        Commands::Budget { data, output } => handle_budget_command(&ctx, &data, output)?,
        Commands::Reimbursements(args) => handle_reimbursements_command(&ctx, &args)?,
        Commands::History { data, output } => handle_history_command(&ctx, &data, output)?,
        Commands::Export(args) => handle_export_command(&ctx, &args)?,
        Commands::CheckExpense(args) => handle_check_expense(&args)?,
        Commands::Init => {
            settings.save(paths)?;
            println!("Wrote settings to: {}", paths.settings_file().display());
        }
        Commands::Config => show_config(paths, settings),
    }

    Ok(())
}

fn main() -> Result<()> {
    monthwise::init_tracing();
    let cli = Cli::parse();

    let paths = MonthwisePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(command) if cli.utc => run(command, &paths, &settings, &Utc)?,
        Some(command) => run(command, &paths, &settings, &Local)?,
        None => {
            println!("Monthwise - month-by-month money summaries");
            println!();
            println!("Run 'monthwise --help' for usage information.");
        }
    }

    Ok(())
}
