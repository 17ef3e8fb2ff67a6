//! Adapter layer: converts the engine's f64 euros into Decimal display figures.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

const ONE_MILLION: Decimal = dec!(1000000);

/// Convert f64 to Decimal (lossy but sufficient for display; non-finite maps to zero).
pub fn to_decimal(v: f64) -> Decimal {
    Decimal::from_f64(v).unwrap_or(Decimal::ZERO)
}

/// Euros to millions of euros, one decimal place, halves away from zero.
pub fn to_millions(euros: f64) -> Decimal {
    (to_decimal(euros) / ONE_MILLION).round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Tonnes rounded to the nearest whole tonne for KPI display.
pub fn whole_tonnes(tonnes: f64) -> Decimal {
    to_decimal(tonnes).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
