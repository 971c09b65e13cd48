use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

pub mod image;
pub mod order_item;
pub mod product;

/// Convert an integer cent amount into a two-fractional-digit decimal.
pub(crate) fn decimal_from_cents(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

/// Convert a decimal amount into integer cents, rounding to the nearest
/// cent. Amounts outside the `i64` cent range saturate at the matching
/// bound instead of wrapping or storing zero.
pub(crate) fn cents_from_decimal(value: Decimal) -> i64 {
    let saturated = if value.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    };
    match value.checked_mul(Decimal::ONE_HUNDRED) {
        Some(cents) => cents.round_dp(0).to_i64().unwrap_or(saturated),
        None => saturated,
    }
}
