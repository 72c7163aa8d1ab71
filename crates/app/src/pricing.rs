//! Money arithmetic

use rust_decimal::{Decimal, RoundingStrategy};

/// Fractional digits kept when rounding to cents.
pub const CENT_SCALE: u32 = 2;

/// Largest unit price a product may carry, the ceiling of `NUMERIC(10, 2)`.
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2);

/// Round an amount to whole cents, halves away from zero.
#[must_use]
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CENT_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Price of `quantity` units at `unit_price`, unrounded. `None` when the
/// product does not fit in a `Decimal`.
#[must_use]
pub fn line_total(unit_price: Decimal, quantity: i32) -> Option<Decimal> {
    unit_price.checked_mul(Decimal::from(quantity))
}
