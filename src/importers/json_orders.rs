use serde_json::{Deserializer, Value};
use tracing::warn;

use crate::tax::{Transaction, TransactionGroup};

/// Groups decoded from a JSON text, plus the problems found while decoding
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParsedOrders {
    pub groups: Vec<TransactionGroup>,
    pub issues: Vec<String>,
}

impl ParsedOrders {
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    pub fn transaction_count(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    /// Append the groups found in `text`; group numbers in issues keep
    /// counting from the groups already parsed
    pub fn parse_text(&mut self, text: &str) {
        for document in Deserializer::from_str(text).into_iter::<Value>() {
            match document {
                Ok(Value::Array(items)) if is_group_list(&items) => {
                    for group in items {
                        self.push_group(group);
                    }
                }
                Ok(value @ Value::Array(_)) => self.push_group(value),
                Ok(other) => {
                    self.push_malformed(format!("expected a list of orders, got {}", kind(&other)))
                }
                Err(e) => {
                    // The stream cannot resume after a syntax error
                    self.push_malformed(e);
                    break;
                }
            }
        }
    }

    /// A group that could not be decoded still occupies its slot in the
    /// output, as an empty group
    fn push_malformed(&mut self, reason: impl std::fmt::Display) {
        let message = format!(
            "Invalid orders ({}) - Group: {}",
            reason,
            self.groups.len() + 1
        );
        warn!("{}", message);
        self.issues.push(message);
        self.groups.push(Vec::new());
    }

    fn push_group(&mut self, value: Value) {
        match serde_json::from_value::<Vec<Transaction>>(value) {
            Ok(group) => self.groups.push(group),
            Err(e) => self.push_malformed(e),
        }
    }
}

/// Decode every JSON document found in `text`.
///
/// Documents may be separated by whitespace or newlines. Each one is either a
/// single group (`[{"operation": ...}, ...]`) or a list of groups
/// (`[[...], [...]]`). Blank input yields no groups.
pub fn parse_orders(text: &str) -> ParsedOrders {
    let mut parsed = ParsedOrders::default();
    parsed.parse_text(text);
    parsed
}

fn is_group_list(items: &[Value]) -> bool {
    !items.is_empty() && items.iter().all(Value::is_array)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
