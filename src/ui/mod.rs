//! Interactive prompt
//!
//! Reads one order list per line, prints the taxes for it and keeps going
//! until an empty line or end of input.

pub mod readline;

use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use std::path::PathBuf;

use crate::cli::formatters::{format_errors, format_results_json, format_results_lines};
use crate::importers::parse_orders;
use crate::tax::{TaxCalculator, TaxResult};

const PROMPT: &str = "Please, provide the orders: ";

/// Launch the interactive prompt.
pub fn run_interactive(calculator: &TaxCalculator, history_path: Option<PathBuf>) -> Result<()> {
    println!("{}", "Capital gains - Interactive Mode".bold());
    println!(
        "Enter one JSON order list per line, an {} to finish\n",
        "empty line".cyan()
    );

    let mut rl = readline::Readline::new(history_path)?;

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    break;
                }

                let parsed = parse_orders(trimmed);
                let report = calculator.calculate(&parsed.groups);

                let mut errors = parsed.issues;
                errors.extend(report.error_messages());
                if !errors.is_empty() {
                    eprint!("{}", format_errors(&errors));
                }

                println!(
                    "{} Calculated taxes: {}",
                    "✓".green().bold(),
                    format_taxes(&report.results())
                );
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                // Ctrl+C / Ctrl+D
                break;
            }
            Err(err) => {
                eprintln!("{} {}", "Error:".red().bold(), err);
                break;
            }
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// A single group prints as its own list, several as one list of lists so
/// the whole answer stays on the labelled line
fn format_taxes(results: &[Vec<TaxResult>]) -> String {
    match results {
        [_] => format_results_lines(results),
        _ => format_results_json(results),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tax::Transaction;
    use rust_decimal_macros::dec;

    #[test]
    fn test_single_group_answer() {
        let report = TaxCalculator::default().calculate(&[vec![
            Transaction::buy(10000, dec!(10)),
            Transaction::sell(5000, dec!(20)),
        ]]);
        assert_eq!(format_taxes(&report.results()), r#"[{"tax":0},{"tax":10000}]"#);
    }

    #[test]
    fn test_several_groups_stay_on_one_line() {
        let parsed = parse_orders(
            r#"[[{"operation":"buy", "unit-cost":10, "quantity": 100}],
                [{"operation":"sell", "unit-cost":10, "quantity": 100}]]"#,
        );
        let report = TaxCalculator::default().calculate(&parsed.groups);

        let answer = format_taxes(&report.results());
        assert_eq!(answer, r#"[[{"tax":0}],[{"tax":0}]]"#);
        assert!(!answer.contains('\n'));
    }
}
