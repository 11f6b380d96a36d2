use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;
use tracing::{debug, debug_span, warn};

use super::cost_basis::{blend_average, realized_profit};
use super::loss_carryforward::LossCarryforward;
use super::models::{Operation, TaxResult, Transaction, TransactionGroup};
use crate::config::{AveragePriceOnSell, TaxConfig};

/// Decimal places kept on every tax amount
const TAX_DECIMAL_PLACES: u32 = 2;

/// Problems found in a transaction. None of them stops the calculation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaxError {
    #[error("Invalid operation ({operation}) - Transaction: {transaction}")]
    InvalidOperation {
        operation: String,
        transaction: String,
    },

    #[error("Invalid quantity ({quantity}) - Transaction: {transaction}")]
    InvalidQuantity { quantity: i64, transaction: String },

    #[error("Invalid unit cost ({unit_cost}) - Transaction: {transaction}")]
    InvalidUnitCost {
        unit_cost: Decimal,
        transaction: String,
    },

    #[error("Amount out of range - Transaction: {transaction}")]
    Overflow { transaction: String },
}

/// Running state of one instrument while its transactions are replayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalculatorState {
    /// Units held; negative after selling more than was bought
    pub position: i64,
    /// Meaningful only while `position > 0`; a sale that closes the
    /// position leaves the last value behind
    pub average_price: Decimal,
    pub losses: LossCarryforward,
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accumulated_loss(&self) -> Decimal {
        self.losses.accumulated()
    }

    /// Replay one transaction on top of this state.
    ///
    /// On error the caller keeps the current state and records a zero tax.
    pub fn apply(
        self,
        tx: &Transaction,
        config: &TaxConfig,
    ) -> Result<(Self, TaxResult), TaxError> {
        let operation = tx
            .parsed_operation()
            .ok_or_else(|| TaxError::InvalidOperation {
                operation: tx.operation.clone(),
                transaction: tx.to_json(),
            })?;

        if tx.quantity <= 0 {
            return Err(TaxError::InvalidQuantity {
                quantity: tx.quantity,
                transaction: tx.to_json(),
            });
        }
        if tx.unit_cost < Decimal::ZERO {
            return Err(TaxError::InvalidUnitCost {
                unit_cost: tx.unit_cost,
                transaction: tx.to_json(),
            });
        }

        let step = match operation {
            Operation::Buy => self.buy(tx).map(|next| (next, TaxResult::zero())),
            Operation::Sell => self.sell(tx, config),
        };
        step.ok_or_else(|| TaxError::Overflow {
            transaction: tx.to_json(),
        })
    }

    fn buy(self, tx: &Transaction) -> Option<Self> {
        Some(Self {
            position: self.position.checked_add(tx.quantity)?,
            average_price: blend_average(
                self.position,
                self.average_price,
                tx.quantity,
                tx.unit_cost,
            )?,
            losses: self.losses,
        })
    }

    fn sell(self, tx: &Transaction, config: &TaxConfig) -> Option<(Self, TaxResult)> {
        let profit = realized_profit(self.average_price, tx.quantity, tx.unit_cost)?;
        let (losses, net) = self.losses.offset(profit)?;

        let tax = if tx.total_value()? > config.exemption_threshold && net > Decimal::ZERO {
            net.checked_mul(config.tax_rate)?
                .round_dp_with_strategy(TAX_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        } else {
            Decimal::ZERO
        };

        let position = self.position.checked_sub(tx.quantity)?;
        let average_price = match config.average_price_on_sell {
            AveragePriceOnSell::Hold => self.average_price,
            AveragePriceOnSell::Reblend => {
                blend_average(position, self.average_price, tx.quantity, tx.unit_cost)?
            }
        };

        let next = Self {
            position,
            average_price,
            losses,
        };
        Some((next, TaxResult::new(tax)))
    }
}

/// Results for one transaction group
#[derive(Debug, Clone, Default)]
pub struct GroupOutcome {
    /// One entry per input transaction, in input order
    pub results: Vec<TaxResult>,
    /// State after each transaction, aligned with `results`
    pub states: Vec<CalculatorState>,
    pub errors: Vec<TaxError>,
}

impl GroupOutcome {
    pub fn total_tax(&self) -> Decimal {
        self.results.iter().map(|r| r.tax).sum()
    }
}

/// Results for a whole run, one outcome per input group
#[derive(Debug, Clone, Default)]
pub struct CalculationReport {
    pub groups: Vec<GroupOutcome>,
}

impl CalculationReport {
    pub fn results(&self) -> Vec<Vec<TaxResult>> {
        self.groups.iter().map(|g| g.results.clone()).collect()
    }

    pub fn errors(&self) -> impl Iterator<Item = &TaxError> {
        self.groups.iter().flat_map(|g| g.errors.iter())
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors().map(|e| e.to_string()).collect()
    }

    pub fn total_tax(&self) -> Decimal {
        self.groups.iter().map(GroupOutcome::total_tax).sum()
    }
}

/// Weighted-average capital gains calculator
#[derive(Debug, Clone, Default)]
pub struct TaxCalculator {
    config: TaxConfig,
}

impl TaxCalculator {
    pub fn new(config: TaxConfig) -> Self {
        Self { config }
    }

    /// Replay one group from a fresh state
    pub fn calculate_group(&self, group: &[Transaction]) -> GroupOutcome {
        let mut outcome = GroupOutcome {
            results: Vec::with_capacity(group.len()),
            states: Vec::with_capacity(group.len()),
            errors: Vec::new(),
        };

        let final_state = group.iter().fold(CalculatorState::new(), |state, tx| {
            let (next, result) = match state.apply(tx, &self.config) {
                Ok(step) => step,
                Err(e) => {
                    warn!("{}", e);
                    outcome.errors.push(e);
                    (state, TaxResult::zero())
                }
            };

            debug!(
                operation = %tx.operation,
                quantity = tx.quantity,
                unit_cost = %tx.unit_cost,
                position = next.position,
                average_price = %next.average_price,
                accumulated_loss = %next.accumulated_loss(),
                tax = %result.tax,
                "processed transaction"
            );

            outcome.results.push(result);
            outcome.states.push(next);
            next
        });

        debug!(
            position = final_state.position,
            transactions = group.len(),
            "group finished"
        );
        outcome
    }

    /// Calculate every group independently, keeping input order
    pub fn calculate(&self, groups: &[TransactionGroup]) -> CalculationReport {
        let groups = groups
            .iter()
            .enumerate()
            .map(|(index, group)| {
                let _span = debug_span!("group", index).entered();
                self.calculate_group(group)
            })
            .collect();

        CalculationReport { groups }
    }
}

/// Calculate with the default configuration.
///
/// Returns the tax per transaction for each group and the error messages
/// collected along the way.
pub fn calculate(groups: &[TransactionGroup]) -> (Vec<Vec<TaxResult>>, Vec<String>) {
    let report = TaxCalculator::default().calculate(groups);
    (report.results(), report.error_messages())
}
