// Import module - JSON order lists from files, arguments and stdin

pub mod json_orders;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use tracing::info;

pub use json_orders::{parse_orders, ParsedOrders};

/// Import orders from a JSON file
pub fn import_file<P: AsRef<Path>>(file_path: P) -> Result<ParsedOrders> {
    let path = file_path.as_ref();
    info!("Importing orders from: {:?}", path);

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read orders file {}", path.display()))?;
    Ok(parse_orders(&content))
}

/// Import orders from a reader (stdin)
pub fn import_reader<R: Read>(mut reader: R) -> Result<ParsedOrders> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .context("Failed to read orders from input")?;
    Ok(parse_orders(&content))
}

/// Import orders given as separate texts (one per command-line argument)
pub fn import_args<S: AsRef<str>>(args: &[S]) -> ParsedOrders {
    let mut parsed = ParsedOrders::default();
    for arg in args {
        parsed.parse_text(arg.as_ref());
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_import_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(
            file,
            r#"[{{"operation":"buy", "unit-cost":10.00, "quantity": 100}}]"#
        )?;

        let parsed = import_file(file.path())?;
        assert_eq!(parsed.groups.len(), 1);
        Ok(())
    }

    #[test]
    fn test_import_missing_file() {
        assert!(import_file("/nonexistent/orders.json").is_err());
    }

    #[test]
    fn test_import_reader() -> Result<()> {
        let input = b"[]\n[{\"operation\":\"sell\", \"unit-cost\":1, \"quantity\": 1}]\n";
        let parsed = import_reader(&input[..])?;
        assert_eq!(parsed.groups.len(), 2);
        assert!(parsed.groups[0].is_empty());
        Ok(())
    }

    #[test]
    fn test_import_args_numbers_groups_across_arguments() {
        let parsed = import_args(&[
            r#"[{"operation":"buy", "unit-cost":10, "quantity": 100}]"#,
            "not json",
        ]);
        assert_eq!(parsed.groups.len(), 2);
        assert_eq!(parsed.issues.len(), 1);
        assert!(parsed.issues[0].ends_with("- Group: 2"));
    }
}
