use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub mod formatters;
pub mod runner;

#[derive(Parser)]
#[command(name = "capital-gains")]
#[command(
    version,
    about = "Capital gains tax calculator for stock buy/sell orders"
)]
#[command(
    long_about = "Calculate the tax owed on each sale of a sequence of stock orders, using the weighted average purchase price and carrying losses forward to offset later gains."
)]
pub struct Cli {
    /// Disable colorized/ANSI output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Path to a TOML config file (exemption threshold, tax rate, average price policy)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Without a command, prompts interactively on a terminal and reads stdin otherwise
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate taxes for order lists given as arguments, a file or stdin
    Calculate {
        /// JSON order lists, e.g. '[{"operation":"buy","unit-cost":10.00,"quantity":100}]'
        orders: Vec<String>,

        /// Read orders from a JSON file instead
        #[arg(short, long, conflicts_with = "orders")]
        file: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Print each group's JSON result on its own line
        #[arg(long)]
        per_line: bool,
    },

    /// Prompt for order lists, one per line, until an empty line
    Interactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_calculate_with_orders() {
        let cli = Cli::try_parse_from([
            "capital-gains",
            "--no-color",
            "calculate",
            r#"[{"operation":"buy","unit-cost":10,"quantity":1}]"#,
            "--format",
            "table",
        ])
        .unwrap();

        assert!(cli.no_color);
        match cli.command {
            Some(Commands::Calculate {
                orders,
                file,
                format,
                per_line,
            }) => {
                assert_eq!(orders.len(), 1);
                assert!(file.is_none());
                assert_eq!(format, OutputFormat::Table);
                assert!(!per_line);
            }
            _ => panic!("expected calculate"),
        }
    }

    #[test]
    fn test_file_conflicts_with_orders() {
        let result = Cli::try_parse_from(["capital-gains", "calculate", "[]", "--file", "x.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_no_command() {
        let cli = Cli::try_parse_from(["capital-gains", "--config", "cfg.toml"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.config, Some(PathBuf::from("cfg.toml")));
    }
}
