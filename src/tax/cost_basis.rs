use rust_decimal::Decimal;

/// Quantity-weighted blend of the current holding and an incoming lot.
///
/// Returns zero when the resulting position is zero, which can only happen
/// when a previous oversell left the position negative. `None` when the
/// amounts overflow.
pub fn blend_average(
    position: i64,
    average_price: Decimal,
    quantity: i64,
    unit_cost: Decimal,
) -> Option<Decimal> {
    let position = Decimal::from(position);
    let quantity = Decimal::from(quantity);

    let total_quantity = position.checked_add(quantity)?;
    if total_quantity.is_zero() {
        return Some(Decimal::ZERO);
    }

    let total_cost = position
        .checked_mul(average_price)?
        .checked_add(quantity.checked_mul(unit_cost)?)?;
    total_cost.checked_div(total_quantity)
}

/// Realized result of selling `quantity` units at `unit_cost` against the
/// current average price. Positive is a gain, negative a loss.
pub fn realized_profit(
    average_price: Decimal,
    quantity: i64,
    unit_cost: Decimal,
) -> Option<Decimal> {
    unit_cost
        .checked_sub(average_price)?
        .checked_mul(Decimal::from(quantity))
}
