// Tax module - weighted average cost basis and loss carry-forward

pub mod calculator;
pub mod cost_basis;
pub mod loss_carryforward;
pub mod models;

pub use calculator::{
    calculate, CalculationReport, CalculatorState, GroupOutcome, TaxCalculator, TaxError,
};
pub use loss_carryforward::LossCarryforward;
pub use models::{Operation, TaxResult, Transaction, TransactionGroup};
