//! CLI command for data export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use chrono::TimeZone;
use clap::{Args, ValueEnum};

use super::{CommandContext, DataArgs};
use crate::error::{MonthwiseError, MonthwiseResult};
use crate::export::{export_records_csv, export_summary_json, export_summary_yaml, SummaryExport};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (income and expense records)
    Csv,
    /// JSON format (summary and history)
    Json,
    /// YAML format (summary and history, human-readable)
    Yaml,
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Output file path; prints to stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

fn write_export<Tz: TimeZone, W: Write>(
    ctx: &CommandContext<'_, Tz>,
    args: &ExportArgs,
    writer: &mut W,
) -> MonthwiseResult<()> {
    let data = ctx.load(&args.data)?;

    match args.format {
        ExportFormat::Csv => export_records_csv(&data, ctx.tz, &mut *writer)?,
        ExportFormat::Json => {
            let export = SummaryExport::build(&data, ctx.now, ctx.month(&args.data), ctx.tz);
            export_summary_json(&export, writer, args.pretty)?;
            writeln!(writer).map_err(|e| MonthwiseError::Export(e.to_string()))?;
        }
        ExportFormat::Yaml => {
            let export = SummaryExport::build(&data, ctx.now, ctx.month(&args.data), ctx.tz);
            export_summary_yaml(&export, writer)?;
        }
    }

    writer
        .flush()
        .map_err(|e| MonthwiseError::Export(e.to_string()))
}

/// Handle the export command
pub fn handle_export_command<Tz: TimeZone>(
    ctx: &CommandContext<'_, Tz>,
    args: &ExportArgs,
) -> MonthwiseResult<()> {
    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                MonthwiseError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(ctx, args, &mut writer)?;
            println!("Exported {:?} to: {}", args.format, path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(ctx, args, &mut writer)?;
        }
    }
    Ok(())
}
