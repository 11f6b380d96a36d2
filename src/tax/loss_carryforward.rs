use rust_decimal::Decimal;

/// Running balance of losses not yet compensated by later gains.
///
/// The balance is never positive: a gain larger than the carried loss
/// clears it, and the surplus is what becomes taxable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LossCarryforward {
    accumulated: Decimal,
}

impl LossCarryforward {
    pub fn new() -> Self {
        Self::default()
    }

    /// Carried balance (zero or negative)
    pub fn accumulated(&self) -> Decimal {
        self.accumulated
    }

    /// Net a realized result against the carried losses.
    ///
    /// Returns the updated carry-forward and the net result. A positive net
    /// is the portion of `profit` left after compensating losses. `None`
    /// when the sum overflows.
    pub fn offset(self, profit: Decimal) -> Option<(Self, Decimal)> {
        let net = profit.checked_add(self.accumulated)?;
        let next = Self {
            accumulated: net.min(Decimal::ZERO),
        };
        Some((next, net))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_loss_accumulates() {
        let (losses, net) = LossCarryforward::new().offset(dec!(-40000)).unwrap();
        assert_eq!(net, dec!(-40000));
        assert_eq!(losses.accumulated(), dec!(-40000));

        let (losses, net) = losses.offset(dec!(-500)).unwrap();
        assert_eq!(net, dec!(-40500));
        assert_eq!(losses.accumulated(), dec!(-40500));
    }

    #[test]
    fn test_partial_compensation() {
        let (losses, _) = LossCarryforward::new().offset(dec!(-40000)).unwrap();
        let (losses, net) = losses.offset(dec!(20000)).unwrap();
        assert_eq!(net, dec!(-20000));
        assert_eq!(losses.accumulated(), dec!(-20000));
    }

    #[test]
    fn test_gain_exceeding_loss_clears_balance() {
        let (losses, _) = LossCarryforward::new().offset(dec!(-25000)).unwrap();
        let (losses, net) = losses.offset(dec!(43500)).unwrap();
        assert_eq!(net, dec!(18500));
        assert_eq!(losses.accumulated(), Decimal::ZERO);

        // Consumed losses are not restored
        let (losses, net) = losses.offset(dec!(6500)).unwrap();
        assert_eq!(net, dec!(6500));
        assert_eq!(losses.accumulated(), Decimal::ZERO);
    }

    #[test]
    fn test_zero_profit_keeps_balance() {
        let (losses, net) = LossCarryforward::new().offset(Decimal::ZERO).unwrap();
        assert_eq!(net, Decimal::ZERO);
        assert_eq!(losses.accumulated(), Decimal::ZERO);
    }

    #[test]
    fn test_overflowing_offset() {
        let (losses, _) = LossCarryforward::new().offset(Decimal::MIN).unwrap();
        assert_eq!(losses.offset(dec!(-1)), None);
        // Compensation never overflows
        assert!(losses.offset(Decimal::MAX).is_some());
    }
}
