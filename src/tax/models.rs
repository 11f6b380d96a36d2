use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::ser::Error as _;
use serde::{Deserialize, Serialize, Serializer};
use std::str::FromStr;

/// Operation of a transaction once it has been validated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Buy,
    Sell,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Buy => "buy",
            Operation::Sell => "sell",
        }
    }
}

impl FromStr for Operation {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(Operation::Buy),
            "sell" => Ok(Operation::Sell),
            _ => Err(()),
        }
    }
}

/// A single buy or sell order, as received.
///
/// The operation is kept as text so an unknown operation can still be
/// reported back together with the rest of the order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub operation: String,
    #[serde(rename = "unit-cost")]
    pub unit_cost: Decimal,
    pub quantity: i64,
}

impl Transaction {
    pub fn new(operation: impl Into<String>, quantity: i64, unit_cost: Decimal) -> Self {
        Self {
            operation: operation.into(),
            unit_cost,
            quantity,
        }
    }

    pub fn buy(quantity: i64, unit_cost: Decimal) -> Self {
        Self::new(Operation::Buy.as_str(), quantity, unit_cost)
    }

    pub fn sell(quantity: i64, unit_cost: Decimal) -> Self {
        Self::new(Operation::Sell.as_str(), quantity, unit_cost)
    }

    pub fn parsed_operation(&self) -> Option<Operation> {
        self.operation.parse().ok()
    }

    /// Gross value of the order (`quantity * unit_cost`), `None` on overflow
    pub fn total_value(&self) -> Option<Decimal> {
        Decimal::from(self.quantity).checked_mul(self.unit_cost)
    }

    /// Compact JSON rendering used in error messages
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{:?}", self))
    }
}

/// One instrument's ordered transaction history
pub type TransactionGroup = Vec<Transaction>;

/// Tax owed for a single transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TaxResult {
    #[serde(serialize_with = "serialize_tax")]
    pub tax: Decimal,
}

impl TaxResult {
    pub fn zero() -> Self {
        Self { tax: Decimal::ZERO }
    }

    pub fn new(tax: Decimal) -> Self {
        Self { tax }
    }
}

/// Integral amounts go out as JSON integers (`10000`), the rest as floats
fn serialize_tax<S: Serializer>(tax: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    let tax = tax.normalize();
    if tax.scale() == 0 {
        if let Some(whole) = tax.to_i64() {
            return serializer.serialize_i64(whole);
        }
    }

    match tax.to_f64() {
        Some(value) => serializer.serialize_f64(value),
        None => Err(S::Error::custom(format!("tax {} is not representable", tax))),
    }
}
