// Fixed-point percentage arithmetic.
//
// Rates are stored as integers at a fixed scale so tax and discount math
// never touches binary floating point. RATE_SCALE represents 100%, which
// leaves four decimal digits of percentage precision (2.5% -> 25_000).

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::{AppError, NumberFormat, Result};

/// Scale factor for stored rates: 1_000_000 represents 100%
pub const RATE_SCALE: i64 = 1_000_000;

/// Convert a ratio (0.025 = 2.5%) to its scaled integer form.
///
/// Fails with `InvalidRate` for negative input or values that overflow the
/// scaled representation. Values finer than the supported precision are
/// rounded half away from zero.
pub fn decimal_to_scaled_rate(rate: Decimal) -> Result<i64> {
    if rate.is_sign_negative() && !rate.is_zero() {
        return Err(AppError::invalid_rate(format!(
            "Rate cannot be negative, got {}",
            rate
        )));
    }

    let scaled = (rate * Decimal::from(RATE_SCALE))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    scaled
        .to_i64()
        .ok_or_else(|| AppError::invalid_rate(format!("Rate {} is out of range", rate)))
}

/// Convert a scaled integer rate back to its ratio form. Exact division,
/// lossless for every representable scaled rate.
pub fn scaled_rate_to_decimal(scaled: i64) -> Decimal {
    Decimal::new(scaled, 6)
}

/// Apply a scaled rate to a minor-unit base amount.
///
/// Computes `round(base * rate / RATE_SCALE)` with an i128 intermediate,
/// rounding half away from zero on the final division only. A zero rate
/// always yields zero; for positive rates the result keeps the sign of the
/// base.
pub fn calculate_percentage(base_minor: i64, scaled_rate: i64) -> i64 {
    if base_minor == 0 || scaled_rate == 0 {
        return 0;
    }

    let product = base_minor as i128 * scaled_rate as i128;
    let half = RATE_SCALE as i128 / 2;
    let magnitude = (product.abs() + half) / RATE_SCALE as i128;

    let signed = if product < 0 { -magnitude } else { magnitude };
    signed as i64
}

/// Render a scaled rate as a localized percentage number.
///
/// Trailing zeros are trimmed and the integer part is grouped, so
/// 10_000_000 renders as "1,000" and -250_000 as "-25" under the default
/// format.
pub fn format_scaled_rate(scaled: i64, format: &NumberFormat) -> String {
    // scaled / 10_000 as an exact decimal: four fractional digits per percent
    let percent = Decimal::new(scaled, 4);
    format.format(percent, None)
}

/// Parse a localized percentage number back to its ratio form.
///
/// Inverse of `format_scaled_rate` up to scaling: "2.5" parses to 0.025.
/// Fails with `InvalidRate` on unparseable input.
pub fn parse_localized_rate(input: &str, format: &NumberFormat) -> Result<Decimal> {
    let percent = format
        .parse_decimal(input)
        .ok_or_else(|| AppError::invalid_rate(format!("Cannot parse rate '{}'", input)))?;

    Ok(percent / Decimal::ONE_HUNDRED)
}
