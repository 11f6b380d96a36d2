use anyhow::Result;
use std::io::IsTerminal;
use std::path::Path;
use tracing::info;

use super::formatters::{
    format_errors, format_report_table, format_results_json, format_results_lines,
};
use super::{Cli, Commands, OutputFormat};
use crate::config::TaxConfig;
use crate::importers::{self, ParsedOrders};
use crate::tax::TaxCalculator;
use crate::ui;

/// Turn ANSI colors off when asked to, or when stdout is not a terminal
pub fn configure_colors(no_color: bool) {
    if no_color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }
}

/// Execute a parsed command line
pub fn run(cli: Cli) -> Result<()> {
    configure_colors(cli.no_color);

    let config = TaxConfig::load(cli.config.as_deref())?;
    let calculator = TaxCalculator::new(config);

    match cli.command {
        Some(Commands::Calculate {
            orders,
            file,
            format,
            per_line,
        }) => {
            let parsed = read_orders(&orders, file.as_deref())?;
            calculate(&calculator, parsed, format, per_line)
        }
        Some(Commands::Interactive) => ui::run_interactive(&calculator, None),
        None if std::io::stdin().is_terminal() => ui::run_interactive(&calculator, None),
        None => {
            let parsed = read_orders(&[], None)?;
            calculate(&calculator, parsed, OutputFormat::Json, true)
        }
    }
}

/// Orders come from the arguments when given, else the file, else stdin
fn read_orders(orders: &[String], file: Option<&Path>) -> Result<ParsedOrders> {
    if !orders.is_empty() {
        return Ok(importers::import_args(orders));
    }

    match file {
        Some(path) => importers::import_file(path),
        None => importers::import_reader(std::io::stdin().lock()),
    }
}

fn calculate(
    calculator: &TaxCalculator,
    parsed: ParsedOrders,
    format: OutputFormat,
    per_line: bool,
) -> Result<()> {
    info!(
        "Calculating taxes for {} transactions in {} groups",
        parsed.transaction_count(),
        parsed.groups.len()
    );

    let report = calculator.calculate(&parsed.groups);

    match format {
        OutputFormat::Json if per_line => {
            let lines = format_results_lines(&report.results());
            if !lines.is_empty() {
                println!("{}", lines);
            }
        }
        OutputFormat::Json => println!("{}", format_results_json(&report.results())),
        OutputFormat::Table => println!("{}", format_report_table(&parsed.groups, &report)),
    }

    let mut errors = parsed.issues;
    errors.extend(report.error_messages());
    if !errors.is_empty() {
        eprint!("{}", format_errors(&errors));
    }

    info!(
        "Done: total tax {}, {} problem(s)",
        report.total_tax(),
        errors.len()
    );
    Ok(())
}
