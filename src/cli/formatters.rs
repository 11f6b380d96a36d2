//! Output formatting module for CLI display
//!
//! This module handles all terminal output formatting, separating
//! the concerns of tax calculation from presentation.

use colored::Colorize;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Style},
    Table, Tabled,
};

use crate::tax::{CalculationReport, TaxResult, TransactionGroup};
use crate::utils::{format_amount, format_quantity};

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|e| format!(r#"{{"error": "JSON serialization failed: {}"}}"#, e))
}

/// Format the results as a single JSON list of lists
pub fn format_results_json(results: &[Vec<TaxResult>]) -> String {
    to_json(results)
}

/// Format the results as one JSON list per line, one line per group
pub fn format_results_lines(results: &[Vec<TaxResult>]) -> String {
    results
        .iter()
        .map(|group| to_json(group))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format every group as a table of transactions and resulting state
pub fn format_report_table(groups: &[TransactionGroup], report: &CalculationReport) -> String {
    #[derive(Tabled)]
    struct TransactionRow {
        #[tabled(rename = "#")]
        index: usize,
        #[tabled(rename = "Operation")]
        operation: String,
        #[tabled(rename = "Quantity")]
        quantity: String,
        #[tabled(rename = "Unit Cost")]
        unit_cost: String,
        #[tabled(rename = "Position")]
        position: String,
        #[tabled(rename = "Avg Price")]
        average_price: String,
        #[tabled(rename = "Carried Loss")]
        carried_loss: String,
        #[tabled(rename = "Tax")]
        tax: String,
    }

    let mut output = String::new();

    for (group_index, (transactions, outcome)) in groups.iter().zip(&report.groups).enumerate() {
        output.push_str(&format!(
            "\n{} Group {} ({} transactions)\n\n",
            "📊".cyan().bold(),
            group_index + 1,
            transactions.len()
        ));

        if transactions.is_empty() {
            output.push_str(&format!("{} No transactions\n", "ℹ".blue().bold()));
            continue;
        }

        let rows: Vec<TransactionRow> = transactions
            .iter()
            .zip(outcome.results.iter().zip(&outcome.states))
            .enumerate()
            .map(|(i, (tx, (result, state)))| {
                let tax = if result.tax > Decimal::ZERO {
                    format_amount(result.tax).green().to_string()
                } else {
                    format_amount(result.tax)
                };
                let carried_loss = if state.accumulated_loss() < Decimal::ZERO {
                    format_amount(state.accumulated_loss()).red().to_string()
                } else {
                    format_amount(state.accumulated_loss())
                };

                TransactionRow {
                    index: i + 1,
                    operation: tx.operation.clone(),
                    quantity: format_quantity(tx.quantity),
                    unit_cost: format_amount(tx.unit_cost),
                    position: format_quantity(state.position),
                    average_price: format_amount(state.average_price),
                    carried_loss,
                    tax,
                }
            })
            .collect();

        let mut table = Table::new(&rows);
        table.with(Style::modern());
        // Right-align everything after the operation column
        table.modify(Columns::new(2..), Alignment::right());
        output.push_str(&table.to_string());

        output.push_str(&format!(
            "\n{:<20} {}\n",
            "Total Tax:".bold(),
            format_amount(outcome.total_tax())
        ));
    }

    output
}

/// Format collected errors for display on stderr
pub fn format_errors(errors: &[String]) -> String {
    let mut output = format!(
        "{} {} problem(s) found:\n",
        "✗".red().bold(),
        errors.len()
    );
    for error in errors {
        output.push_str(&format!("  - {}\n", error));
    }
    output
}
